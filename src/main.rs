use mlproject::DataIngestor;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match DataIngestor::default().run() {
        Ok((train, test)) => {
            println!("Train data saved to: {}", train.display());
            println!("Test data saved to: {}", test.display());
        }
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}
