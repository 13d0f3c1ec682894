//! Top-level build configuration consumed by the bundler engine.
//!
//! This module provides the main `BuildConfig` struct. For the resolver
//! that produces one from environment inputs, see the `resolve` module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::rules::ModuleRule;

/// Build mode selected for a bundler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast rebuilds, hot reload, no optimization (default)
    #[default]
    Development,
    /// Optimized one-shot build
    Production,
}

/// Verbosity of the build-stats report printed after a compile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsLevel {
    /// Only errors and warnings (interactive sessions)
    ErrorsWarnings,
    /// Full per-asset report (default)
    #[default]
    Normal,
}

/// Log level for the engine's own infrastructure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

/// Built-in engine plugins enabled for the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinPlugin {
    /// Skip writing output artifacts when the compile has errors
    NoEmitOnErrors,
}

/// Where bundled artifacts land and how they are addressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory for generated assets
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Filename of the main bundle
    #[serde(default = "default_output_filename")]
    pub filename: String,

    /// URL prefix under which the output directory is served
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_output_filename(),
            public_path: default_public_path(),
        }
    }
}

/// Complete declarative configuration handed to the bundler engine.
///
/// Recomputed fresh by [`crate::resolve`] on every invocation; nothing is
/// mutated after construction and no state persists between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub mode: BuildMode,

    /// Entry point module
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub stats: StatsLevel,

    #[serde(default)]
    pub infrastructure_log_level: LogLevel,

    #[serde(default)]
    pub dev_server: DevServerOptions,

    /// Ordered file-type routing rules
    #[serde(default)]
    pub rules: Vec<ModuleRule>,

    #[serde(default)]
    pub plugins: Vec<BuiltinPlugin>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            entry: default_entry(),
            output: OutputOptions::default(),
            stats: StatsLevel::default(),
            infrastructure_log_level: LogLevel::default(),
            dev_server: DevServerOptions::default(),
            rules: Vec::new(),
            plugins: Vec::new(),
        }
    }
}

impl BuildConfig {
    /// Create from serde_json::Value (for programmatic handoff from an
    /// embedding tool)
    ///
    /// # Example
    ///
    /// ```
    /// use alder_config::{BuildConfig, BuildMode};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "mode": "production",
    ///     "entry": "src/index.js"
    /// });
    ///
    /// let config = BuildConfig::from_value(value).unwrap();
    /// assert_eq!(config.mode, BuildMode::Production);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

fn default_entry() -> PathBuf {
    PathBuf::from("src/index.js")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_output_filename() -> String {
    "bundle.js".to_string()
}

fn default_public_path() -> String {
    "/".to_string()
}
