//! grapebuild CLI - build tooling for the Grape2D JavaScript engine
//!
//! Usage: grapebuild <COMMAND>
//!
//! Commands:
//!   build      Concatenate manifest sources, optionally through the Closure compiler
//!   docs       Generate API documentation via jsdoc
//!   versioner  Reserved version-stamping command (currently a no-op)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use grapebuild::config::Config;
use grapebuild::ui::Ui;
use grapebuild::versioner::VersionRequest;
use grapebuild::{build, docs, manifest, versioner};

/// grapebuild - build tooling for the Grape2D JavaScript engine
#[derive(Parser, Debug)]
#[command(name = "grapebuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Concatenate manifest sources, optionally through the Closure compiler
    Build {
        /// Include name, resolved to <includes_dir>/<name>.json (repeatable)
        #[arg(long, required = true)]
        include: Vec<String>,

        /// Minify through the external Closure compiler
        #[arg(long)]
        minify: bool,

        /// Output artifact path (defaults to the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate API documentation via jsdoc
    Docs {
        /// Include name, resolved to <includes_dir>/<name>.json (repeatable)
        #[arg(long, required = true)]
        include: Vec<String>,

        /// jsdoc configuration path
        #[arg(long, default_value = "./")]
        conf: PathBuf,
    },

    /// Reserved version-stamping command (currently a no-op)
    Versioner {
        /// Include name (repeatable)
        #[arg(long, required = true)]
        include: Vec<String>,

        /// Version label (repeatable)
        #[arg(long, required = true)]
        version: Vec<String>,

        /// Version number (repeatable)
        #[arg(long, required = true)]
        vernum: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = Ui::new(cli.verbose);

    let (config, warnings) =
        Config::load_or_default(Path::new(".")).context("failed to load grapebuild.toml")?;
    for warning in &warnings {
        ui.warn(&format!(
            "unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        ));
    }

    match cli.command {
        Commands::Build {
            include,
            minify,
            output,
        } => cmd_build(&config, &ui, &include, minify, output),
        Commands::Docs { include, conf } => cmd_docs(&config, &ui, &include, &conf),
        Commands::Versioner {
            include,
            version,
            vernum,
        } => cmd_versioner(&ui, include, version, vernum),
    }
}

fn cmd_build(
    config: &Config,
    ui: &Ui,
    includes: &[String],
    minify: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.output.clone());

    ui.status("Building sources");
    let sources = manifest::resolve(&config.includes_dir, includes)
        .context("failed to resolve include manifests")?;
    ui.detail(&format!("{} source file(s) resolved", sources.len()));

    if minify {
        build::minify(config, &sources, &output, ui).context("minified build failed")?;
    } else {
        build::concat(&sources, &output, ui).context("build failed")?;
    }

    ui.status(&format!("Wrote {}", output.display()));
    Ok(())
}

fn cmd_docs(config: &Config, ui: &Ui, includes: &[String], conf: &Path) -> Result<()> {
    ui.status("Building sources");
    let sources = manifest::resolve(&config.includes_dir, includes)
        .context("failed to resolve include manifests")?;

    docs::generate(config, &sources, conf, ui).context("documentation build failed")?;
    Ok(())
}

fn cmd_versioner(
    ui: &Ui,
    includes: Vec<String>,
    versions: Vec<String>,
    vernums: Vec<String>,
) -> Result<()> {
    let request = VersionRequest {
        includes,
        versions,
        vernums,
    };
    versioner::run(&request, ui)?;
    Ok(())
}
