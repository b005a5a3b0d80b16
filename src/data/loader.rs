use std::path::{Path, PathBuf};

use crate::error::{IngestionError, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Source lookup
// ---------------------------------------------------------------------------

/// Return the first candidate that is an existing file.
pub fn locate_source(candidates: &[PathBuf]) -> Result<&Path> {
    for path in candidates {
        if path.is_file() {
            return Ok(path.as_path());
        }
        log::debug!("No dataset at {}", path.display());
    }
    Err(IngestionError::NotFound {
        searched: candidates.to_vec(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: a header row with column names, then one record per row.
/// Every row must have as many fields as the header.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| IngestionError::csv(path, e))?;
    let headers = reader
        .headers()
        .map_err(|e| IngestionError::csv(path, e))?
        .clone();
    if headers.is_empty() {
        return Err(IngestionError::NoColumns {
            path: path.to_path_buf(),
        });
    }

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| IngestionError::csv(path, e))?;

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.csv");
        let third = dir.path().join("third.csv");
        fs::write(&second, "a\n1\n").unwrap();
        fs::write(&third, "a\n1\n").unwrap();

        let candidates = vec![dir.path().join("missing.csv"), second.clone(), third];
        assert_eq!(locate_source(&candidates).unwrap(), second.as_path());
    }

    #[test]
    fn directories_are_not_sources() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().to_path_buf()];
        assert!(matches!(
            locate_source(&candidates),
            Err(IngestionError::NotFound { .. })
        ));
    }

    #[test]
    fn not_found_reports_all_candidates() {
        let candidates = vec![PathBuf::from("nope/a.csv"), PathBuf::from("nope/b.csv")];
        match locate_source(&candidates) {
            Err(IngestionError::NotFound { searched }) => assert_eq!(searched, candidates),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn loads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        fs::write(&path, "gender,math_score\nfemale,72\n\"male, b\",69\n").unwrap();

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.column_names(), vec!["gender", "math_score"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(&ds.rows()[1][0], "male, b");
    }

    #[test]
    fn empty_file_has_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, b"").unwrap();

        assert!(matches!(load_csv(&path), Err(IngestionError::NoColumns { .. })));
    }

    #[test]
    fn header_only_file_loads_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.csv");
        fs::write(&path, "a,b\n").unwrap();

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.shape(), (0, 2));
    }

    #[test]
    fn ragged_rows_are_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2\n3\n").unwrap();

        assert!(matches!(load_csv(&path), Err(IngestionError::Csv { .. })));
    }
}
