//! Manifest loading
//!
//! A manifest is a JSON array of relative file paths, stored as
//! `<includes_dir>/<name>.json`. Array order is concatenation order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

/// An ordered list of source files, as read from one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub files: Vec<PathBuf>,
}

impl Manifest {
    /// Load the manifest for an include name.
    pub fn load(includes_dir: &Path, name: &str) -> BuildResult<Self> {
        let path = includes_dir.join(format!("{}.json", name));

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BuildError::ManifestNotFound {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                BuildError::Io(e)
            }
        })?;

        let files: Vec<PathBuf> =
            serde_json::from_str(&content).map_err(|e| BuildError::ManifestParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            name: name.to_string(),
            files,
        })
    }
}

/// Resolve include names into one ordered source list.
///
/// Manifests are loaded in the order the names were given and their entries
/// concatenated. Duplicates are kept: a file listed twice is built twice,
/// matching the historical script.
pub fn resolve(includes_dir: &Path, names: &[String]) -> BuildResult<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for name in names {
        let manifest = Manifest::load(includes_dir, name)?;
        sources.extend(manifest.files);
    }
    Ok(sources)
}
