use std::path::Path;

use crate::error::{IngestionError, Result};

use super::model::Dataset;

/// Write a dataset as CSV: header row first, no index column.
/// An existing file at `path` is overwritten.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let to_err = |e| IngestionError::csv(path, e);

    let mut writer = csv::Writer::from_path(path).map_err(to_err)?;
    writer.write_record(dataset.headers()).map_err(to_err)?;
    for row in dataset.rows() {
        writer.write_record(row).map_err(to_err)?;
    }
    writer
        .flush()
        .map_err(|e| IngestionError::io(format!("flushing {}", path.display()), e))?;

    log::debug!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}
