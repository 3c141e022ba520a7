//! grapebuild - build tooling for the Grape2D JavaScript engine
//!
//! Replaces the historical Python build scripts with a single binary:
//! JSON manifests under `includes/` name the source files, which are
//! either concatenated byte-for-byte or handed to the external Closure
//! compiler, with a separate path for jsdoc generation.

pub mod build;
pub mod config;
pub mod docs;
pub mod error;
pub mod manifest;
pub mod ui;
pub mod versioner;

// Re-exports for convenience
pub use config::Config;
pub use error::{BuildError, BuildResult};
pub use manifest::Manifest;
