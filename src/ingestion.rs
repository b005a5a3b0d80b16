use std::path::{Path, PathBuf};

use crate::config::IngestionConfig;
use crate::data::loader::{load_csv, locate_source};
use crate::data::split::train_test_split;
use crate::data::writer::write_csv;
use crate::error::{IngestionError, Result};
use crate::report::{LogReporter, Reporter};

// ---------------------------------------------------------------------------
// Data ingestion stage
// ---------------------------------------------------------------------------

/// Finds the source dataset, keeps a raw copy and writes a seeded
/// train/test split next to it.
pub struct DataIngestor {
    config: IngestionConfig,
    reporter: Box<dyn Reporter>,
}

impl Default for DataIngestor {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

impl DataIngestor {
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            config,
            reporter: Box::new(LogReporter),
        }
    }

    /// Replace the default `log` reporter.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Run the stage and return `(train_path, test_path)`.
    ///
    /// Output files are written one after another; a failure midway leaves
    /// whatever was already written in place.
    pub fn run(&self) -> Result<(PathBuf, PathBuf)> {
        self.reporter
            .info("Entered the data ingestion method or component");
        self.ingest().map_err(|err| {
            self.reporter.failure(&err);
            err
        })
    }

    fn ingest(&self) -> Result<(PathBuf, PathBuf)> {
        let cfg = &self.config;

        let source = locate_source(&cfg.source_candidates)?;
        let dataset = load_csv(source)?;
        self.reporter
            .info(&format!("Successfully read data from: {}", source.display()));

        let (rows, cols) = dataset.shape();
        self.reporter
            .info(&format!("Read dataset with shape: ({rows}, {cols})"));
        for (name, kind) in dataset.column_types() {
            log::debug!("  {name}: {kind}");
        }

        for dir in cfg.output_dirs() {
            create_dir(dir)?;
        }

        write_csv(&dataset, &cfg.raw_data_path)?;

        self.reporter.info("Train Test Split Initiated");
        let (train, test) = train_test_split(&dataset, cfg.test_fraction, cfg.seed)?;

        write_csv(&train, &cfg.train_data_path)?;
        write_csv(&test, &cfg.test_data_path)?;

        self.reporter.info(&format!(
            "Ingestion of the data completed: train={} rows, test={} rows",
            train.len(),
            test.len()
        ));

        Ok((cfg.train_data_path.clone(), cfg.test_data_path.clone()))
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| IngestionError::io(format!("creating directory {}", dir.display()), e))
}
