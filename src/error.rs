use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while ingesting a dataset.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("could not find the source dataset in any expected location: {}", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no columns to parse from {}", .path.display())]
    NoColumns { path: PathBuf },

    #[error("cannot split dataset: {0}")]
    Split(String),
}

pub type Result<T, E = IngestionError> = std::result::Result<T, E>;

impl IngestionError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
