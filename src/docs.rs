//! API documentation build via the external jsdoc tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{BuildError, BuildResult};
use crate::ui::Ui;

/// Run the documentation generator over a resolved source list.
///
/// Unlike the minify path nothing is read back afterwards, so a failing
/// exit status is the only signal the user gets and is treated as fatal.
pub fn generate(config: &Config, sources: &[PathBuf], conf: &Path, ui: &Ui) -> BuildResult<()> {
    let joined = sources
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    ui.status(&format!("Sources are \"{}\"", joined));
    ui.status("Generating jsdoc");

    let mut cmd = Command::new(&config.docs.command);
    cmd.arg("-c").arg(conf);
    cmd.args(sources);
    ui.command(&cmd);

    let status = cmd.status().map_err(|e| BuildError::ToolSpawn {
        tool: config.docs.command.clone(),
        source: e,
    })?;
    if !status.success() {
        return Err(BuildError::DocsFailed { status });
    }
    Ok(())
}
