//! Error types for grapebuild
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for grapebuild operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for grapebuild operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// Named include has no manifest file on disk
    #[error("manifest '{name}' not found at {path}")]
    ManifestNotFound { name: String, path: PathBuf },

    /// Manifest exists but is not a JSON array of strings
    #[error("invalid manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// A file listed in a manifest could not be read
    #[error("failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// External tool could not be launched at all
    #[error("failed to launch '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        source: std::io::Error,
    },

    /// The compiler ran but left no artifact to read back
    #[error("failed to read compiler output {path}: {source}")]
    CompilerOutputMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Documentation generator exited with a failure status
    #[error("documentation generator exited with {status}")]
    DocsFailed { status: ExitStatus },

    /// Invalid configuration file
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
