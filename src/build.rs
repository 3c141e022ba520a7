//! Build pipeline: plain concatenation and the minified Closure build.
//!
//! Both paths take the source list already resolved from manifests. The
//! concat path stages into a temp file and copies the result over the
//! output; the minify path hands the file list to the external compiler
//! and prepends the header to whatever it produced.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{BuildError, BuildResult};
use crate::ui::{render_command, Ui};

/// Fixed Closure compiler flags, matching the historical invocation.
const COMPILER_FLAGS: [&str; 4] = [
    "--warning_level=VERBOSE",
    "--jscomp_off=globalThis",
    "--jscomp_off=checkTypes",
    "--language_in=ECMASCRIPT5_STRICT",
];

/// Concatenate sources byte-for-byte into the output artifact.
///
/// The output is fully overwritten; nothing from a previous build survives.
pub fn concat(sources: &[PathBuf], output: &Path, ui: &Ui) -> BuildResult<()> {
    let mut scratch = NamedTempFile::new()?;

    for source in sources {
        let mut file = File::open(source).map_err(|e| BuildError::SourceRead {
            path: source.clone(),
            source: e,
        })?;
        io::copy(&mut file, &mut scratch).map_err(|e| BuildError::SourceRead {
            path: source.clone(),
            source: e,
        })?;
        ui.detail(&format!("appended {}", source.display()));
    }
    scratch.flush()?;

    // Copy rather than rename: the output may live on another filesystem.
    fs::copy(scratch.path(), output)?;
    set_artifact_permissions(output)?;
    Ok(())
}

// Temp files are created 0600; the shipped artifact should be group-readable.
#[cfg(unix)]
fn set_artifact_permissions(output: &Path) -> BuildResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(output, fs::Permissions::from_mode(0o664))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_artifact_permissions(_output: &Path) -> BuildResult<()> {
    Ok(())
}

/// Build the Closure compiler invocation for a source list.
pub fn compiler_command(config: &Config, sources: &[PathBuf], output: &Path) -> Command {
    let mut cmd = Command::new(&config.compiler.command);
    cmd.args(&config.compiler.args);
    cmd.args(COMPILER_FLAGS);
    cmd.arg("--js");
    cmd.args(sources);
    cmd.arg("--js_output_file");
    cmd.arg(output);
    cmd
}

/// Minified build: run the external compiler, then prepend the header line.
///
/// The compiler's exit status is advisory only. The real success signal is
/// whether an artifact exists to read back, which keeps parity with the
/// script this replaces.
pub fn minify(config: &Config, sources: &[PathBuf], output: &Path, ui: &Ui) -> BuildResult<()> {
    let mut cmd = compiler_command(config, sources, output);
    ui.detail(&render_command(&cmd));

    let status = cmd.status().map_err(|e| BuildError::ToolSpawn {
        tool: config.compiler.command.clone(),
        source: e,
    })?;
    if !status.success() {
        ui.warn(&format!("compiler exited with {}", status));
    }

    let compiled = fs::read_to_string(output).map_err(|e| BuildError::CompilerOutputMissing {
        path: output.to_path_buf(),
        source: e,
    })?;
    fs::write(output, format!("{}\n{}", config.header, compiled))?;
    Ok(())
}
