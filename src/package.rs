use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editable-install marker that points a requirements file back at the
/// project itself.
pub const EDITABLE_SELF: &str = "-e .";

pub const PACKAGE_NAME: &str = "mlproject";
pub const PACKAGE_VERSION: &str = "0.0.1";
pub const PACKAGE_AUTHOR: &str = "Neha";
pub const PACKAGE_AUTHOR_EMAIL: &str = "nehagovekar2198@gmail.com";

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("reading requirements from {}: {source}", .path.display())]
    Requirements {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Project metadata plus its install requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub author: String,
    pub author_email: String,
    pub install_requires: Vec<String>,
}

impl PackageDescriptor {
    /// Fixed metadata with requirements read from `requirements_path`.
    pub fn from_requirements(requirements_path: &Path) -> Result<Self, PackageError> {
        Ok(Self {
            name: PACKAGE_NAME.to_string(),
            version: PACKAGE_VERSION.to_string(),
            author: PACKAGE_AUTHOR.to_string(),
            author_email: PACKAGE_AUTHOR_EMAIL.to_string(),
            install_requires: load_requirements(requirements_path)?,
        })
    }
}

/// Read a requirements file: one requirement per line.
pub fn load_requirements(path: &Path) -> Result<Vec<String>, PackageError> {
    let text = std::fs::read_to_string(path).map_err(|source| PackageError::Requirements {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_requirements(&text))
}

/// Blank lines, `#` comments and the self-referential `-e .` are dropped.
pub fn parse_requirements(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && *line != EDITABLE_SELF)
        .map(str::to_string)
        .collect()
}
