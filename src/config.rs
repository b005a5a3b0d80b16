use std::path::{Path, PathBuf};

/// Fraction of rows held out for the test partition.
pub const TEST_FRACTION: f64 = 0.2;

/// Seed for the train/test shuffle.
pub const RANDOM_SEED: u64 = 42;

pub const ARTIFACTS_DIR: &str = "artifacts";
pub const RAW_FILE: &str = "data.csv";
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";

/// Where the source dataset is looked for, relative to the working directory.
pub const SOURCE_RELATIVE: &str = "notebook/data/stud.csv";

/// Output locations and split parameters for one ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionConfig {
    /// Ordered source candidates; the first existing file wins.
    pub source_candidates: Vec<PathBuf>,
    pub raw_data_path: PathBuf,
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let artifacts = Path::new(ARTIFACTS_DIR);
        Self {
            source_candidates: default_source_candidates(),
            raw_data_path: artifacts.join(RAW_FILE),
            train_data_path: artifacts.join(TRAIN_FILE),
            test_data_path: artifacts.join(TEST_FILE),
            test_fraction: TEST_FRACTION,
            seed: RANDOM_SEED,
        }
    }
}

impl IngestionConfig {
    /// Put all three output files under `dir`, keeping their file names.
    pub fn with_artifacts_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.raw_data_path = dir.join(RAW_FILE);
        self.train_data_path = dir.join(TRAIN_FILE);
        self.test_data_path = dir.join(TEST_FILE);
        self
    }

    /// Replace the source candidate list.
    pub fn with_sources<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_candidates = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Distinct parent directories of the output files, in declaration order.
    pub fn output_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for path in [&self.raw_data_path, &self.train_data_path, &self.test_data_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !dirs.contains(&parent) {
                    dirs.push(parent);
                }
            }
        }
        dirs
    }
}

/// `notebook/data/stud.csv` from the working directory, from two levels up,
/// and from the crate root.
pub fn default_source_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(SOURCE_RELATIVE),
        Path::new("../..").join(SOURCE_RELATIVE),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(SOURCE_RELATIVE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_artifacts_convention() {
        let cfg = IngestionConfig::default();
        assert_eq!(cfg.raw_data_path, Path::new("artifacts").join("data.csv"));
        assert_eq!(cfg.train_data_path, Path::new("artifacts").join("train.csv"));
        assert_eq!(cfg.test_data_path, Path::new("artifacts").join("test.csv"));
        assert_eq!(cfg.test_fraction, 0.2);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.source_candidates.len(), 3);
        assert_eq!(cfg.source_candidates[0], PathBuf::from("notebook/data/stud.csv"));
    }

    #[test]
    fn output_dirs_are_deduplicated() {
        let cfg = IngestionConfig::default();
        assert_eq!(cfg.output_dirs(), vec![Path::new("artifacts")]);

        let mut cfg = cfg.with_artifacts_dir("out");
        cfg.test_data_path = PathBuf::from("held_out/test.csv");
        assert_eq!(
            cfg.output_dirs(),
            vec![Path::new("out"), Path::new("held_out")]
        );
    }

    #[test]
    fn bare_file_names_need_no_directory() {
        let mut cfg = IngestionConfig::default();
        cfg.raw_data_path = PathBuf::from("data.csv");
        cfg.train_data_path = PathBuf::from("train.csv");
        cfg.test_data_path = PathBuf::from("test.csv");
        assert!(cfg.output_dirs().is_empty());
    }
}
