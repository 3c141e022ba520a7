//! Console progress reporting.
//!
//! Keeps the ` * ` status-line style of the historical build scripts.
//! Detail lines are gated behind `-v`.

use std::process::Command;

/// Progress reporter for CLI commands
pub struct Ui {
    verbose: u8,
}

impl Ui {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    /// Top-level progress line
    pub fn status(&self, msg: &str) {
        println!(" * {}", msg);
    }

    /// Per-step detail, shown with -v
    pub fn detail(&self, msg: &str) {
        if self.verbose > 0 {
            println!("   - {}", msg);
        }
    }

    /// Non-fatal problem worth telling the user about
    pub fn warn(&self, msg: &str) {
        eprintln!(" ! {}", msg);
    }

    /// Echo an external command line before running it
    pub fn command(&self, cmd: &Command) {
        println!("{}", render_command(cmd));
    }
}

/// Render a command as the shell line it approximates.
pub fn render_command(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
