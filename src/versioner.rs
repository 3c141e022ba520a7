//! Version stamping (reserved).
//!
//! The legacy versioner script declared its flag surface but never gained an
//! implementation. The subcommand keeps those flags stable so scripts can
//! already pass them; invoking it succeeds and writes nothing.

use crate::error::BuildResult;
use crate::ui::Ui;

/// Parsed versioner flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequest {
    pub includes: Vec<String>,
    pub versions: Vec<String>,
    pub vernums: Vec<String>,
}

// TODO: stamp version strings into the built artifact once the Grape2D
// numbering scheme is settled.
pub fn run(request: &VersionRequest, ui: &Ui) -> BuildResult<()> {
    ui.detail(&format!(
        "versioner invoked with {} include(s), {} version(s); nothing to do yet",
        request.includes.len(),
        request.versions.len()
    ));
    Ok(())
}
