//! Configuration module for grapebuild
//!
//! Configuration precedence:
//! 1. CLI flags (highest priority)
//! 2. Project config (`grapebuild.toml` in the working directory)
//! 3. Built-in defaults (lowest priority)
//!
//! The built-in defaults reproduce the historical build script exactly:
//! manifests under `includes/`, artifact at `../build/Grape2D.js`, Closure
//! compiler via `java -jar compiler/compiler.jar`, docs via `jsdoc`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};

/// External compiler invocation: program plus leading arguments.
///
/// The fixed Closure flags (warning level, disabled checks, language level)
/// are not configurable; they live in [`crate::build`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_compiler_command")]
    pub command: String,

    #[serde(default = "default_compiler_args")]
    pub args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler_command(),
            args: default_compiler_args(),
        }
    }
}

fn default_compiler_command() -> String {
    "java".to_string()
}

fn default_compiler_args() -> Vec<String> {
    vec!["-jar".to_string(), "compiler/compiler.jar".to_string()]
}

/// Documentation generator invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_command")]
    pub command: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            command: default_docs_command(),
        }
    }
}

fn default_docs_command() -> String {
    "jsdoc".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<name>.json` manifests
    #[serde(default = "default_includes_dir")]
    pub includes_dir: PathBuf,

    /// Default output artifact path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Header line prepended to minified output
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub docs: DocsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes_dir: default_includes_dir(),
            output: default_output(),
            header: default_header(),
            compiler: CompilerConfig::default(),
            docs: DocsConfig::default(),
        }
    }
}

fn default_includes_dir() -> PathBuf {
    PathBuf::from("includes")
}

fn default_output() -> PathBuf {
    PathBuf::from("../build/Grape2D.js")
}

fn default_header() -> String {
    "// Grape2D".to_string()
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BuildResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| BuildError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load `grapebuild.toml` from the working directory, or defaults.
    ///
    /// A malformed config is fatal; a missing one is not.
    pub fn load_or_default(dir: &Path) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        let path = dir.join("grapebuild.toml");
        if path.exists() {
            Self::load_with_warnings(&path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }
}
