use std::path::PathBuf;

use anyhow::{Context, Result};

use mlproject::package::PackageDescriptor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let requirements = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("requirements.txt"));

    let descriptor = PackageDescriptor::from_requirements(&requirements)?;
    log::info!(
        "{} {}: {} requirements",
        descriptor.name,
        descriptor.version,
        descriptor.install_requires.len()
    );

    let json = serde_json::to_string_pretty(&descriptor).context("serializing package descriptor")?;
    println!("{json}");
    Ok(())
}
