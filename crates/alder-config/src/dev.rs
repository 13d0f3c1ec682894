//! Development server configuration types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub hot: HotMode,

    /// Ordered path-prefix routing table; the first matching prefix wins
    #[serde(default)]
    pub proxy: IndexMap<String, ProxyRule>,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            port: default_port(),
            hot: HotMode::default(),
            proxy: IndexMap::new(),
        }
    }
}

/// Hot module replacement behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotMode {
    /// Full page reload on every change
    Off,
    /// In-place replacement, falling back to a full reload on failure
    On,
    /// In-place replacement only, never a full reload (default)
    #[default]
    Only,
}

/// One proxied path prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    /// Backend address requests are forwarded to. Passed through to the
    /// proxy uninterpreted; an unset or malformed address surfaces as a
    /// proxy error at request time, not here.
    pub target: Option<String>,

    /// Rewrite the Host/Origin headers to match the target
    #[serde(default)]
    pub change_origin: bool,
}

fn default_port() -> u16 {
    8000
}
