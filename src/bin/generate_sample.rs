use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use mlproject::config::SOURCE_RELATIVE;

const N_STUDENTS: usize = 1000;

const GENDERS: [&str; 2] = ["female", "male"];
const GROUPS: [&str; 5] = ["group A", "group B", "group C", "group D", "group E"];
const EDUCATION: [&str; 6] = [
    "some high school",
    "high school",
    "some college",
    "associate's degree",
    "bachelor's degree",
    "master's degree",
];
const LUNCH: [&str; 2] = ["standard", "free/reduced"];
const PREP: [&str; 2] = ["none", "completed"];

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn score(rng: &mut StdRng, base: f64) -> u32 {
    gauss(rng, base, 12.0).round().clamp(0.0, 100.0) as u32
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SOURCE_RELATIVE));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut rng = StdRng::seed_from_u64(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record([
        "gender",
        "race_ethnicity",
        "parental_level_of_education",
        "lunch",
        "test_preparation_course",
        "math_score",
        "reading_score",
        "writing_score",
    ])?;

    for _ in 0..N_STUDENTS {
        let gender = pick(&mut rng, &GENDERS);
        let group = pick(&mut rng, &GROUPS);
        let education = pick(&mut rng, &EDUCATION);
        let lunch = pick(&mut rng, &LUNCH);
        let prep = pick(&mut rng, &PREP);

        // Lunch and preparation shift all three scores; gender shifts math
        // against reading/writing.
        let mut base = 66.0;
        if lunch == "standard" {
            base += 5.0;
        }
        if prep == "completed" {
            base += 5.0;
        }
        let (math_shift, verbal_shift) = if gender == "male" { (4.0, -4.0) } else { (-2.0, 3.0) };

        let math = score(&mut rng, base + math_shift).to_string();
        let reading = score(&mut rng, base + verbal_shift).to_string();
        let writing = score(&mut rng, base + verbal_shift - 1.0).to_string();

        writer.write_record([
            gender,
            group,
            education,
            lunch,
            prep,
            math.as_str(),
            reading.as_str(),
            writing.as_str(),
        ])?;
    }
    writer.flush()?;

    log::info!("Wrote {N_STUDENTS} students to {}", output_path.display());
    println!("Wrote {N_STUDENTS} students to {}", output_path.display());
    Ok(())
}
