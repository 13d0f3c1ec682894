//! File-type routing rules.
//!
//! Each [`ModuleRule`] routes files matched by extension to a handler:
//! either a loader chain (applied last-to-first, as the engine expects) or
//! built-in inline-asset embedding.

use serde::{Deserialize, Serialize};

/// A single stage in a loader chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options", rename_all = "kebab-case")]
pub enum Loader {
    /// Hot-reload wrapper around the Elm loader; development sessions only
    ElmHot,
    /// The Elm compiler loader
    Elm(ElmOptions),
    /// Injects compiled stylesheets into the document at runtime
    StyleInject,
    /// Parses CSS and its imports into engine modules
    Css,
}

/// Options forwarded to the Elm compiler loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElmOptions {
    /// Compile with the time-traveling debugger enabled
    #[serde(default)]
    pub debug: bool,

    /// Compile with `--optimize` (incompatible with `debug`)
    #[serde(default)]
    pub optimize: bool,
}

/// How files matched by a rule are handled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleHandler {
    /// Run matched files through a loader chain
    Loaders(Vec<Loader>),
    /// Embed matched files into the bundle as data URLs
    AssetInline,
}

impl RuleHandler {
    /// The loader chain, if this handler has one
    pub fn loaders(&self) -> Option<&[Loader]> {
        match self {
            Self::Loaders(chain) => Some(chain),
            Self::AssetInline => None,
        }
    }
}

/// Routes files to a handler by extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// File extensions this rule matches, without the leading dot
    pub test: Vec<String>,

    /// Path components that disqualify a match (build caches, vendored
    /// dependencies)
    #[serde(default)]
    pub exclude: Vec<String>,

    pub handler: RuleHandler,
}
