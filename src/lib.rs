//! Data ingestion stage of an ML project: locate a CSV dataset, keep a raw
//! copy, and write a reproducible 80/20 train/test split under `artifacts/`.

pub mod config;
pub mod data;
pub mod error;
pub mod ingestion;
pub mod package;
pub mod report;

pub use config::IngestionConfig;
pub use data::model::Dataset;
pub use error::{IngestionError, Result};
pub use ingestion::DataIngestor;
pub use report::{LogReporter, Reporter};
