//! Resolves environment inputs into a [`BuildConfig`].
//!
//! This is the whole lifecycle of a configuration object: the engine calls
//! [`resolve`] once per build or serve session with a fresh
//! [`Environment`] snapshot, consumes the returned object, and discards
//! it. Nothing is cached between invocations.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::{
    BuildConfig, BuildMode, BuiltinPlugin, LogLevel, OutputOptions, StatsLevel,
};
use crate::dev::{DevServerOptions, HotMode, ProxyRule};
use crate::rules::{ElmOptions, Loader, ModuleRule, RuleHandler};

/// Environment variable naming the backend the dev server proxies to
pub const BACKEND_VAR: &str = "BACKEND";

/// Path prefix forwarded to the backend
pub const PING_PREFIX: &str = "/ping";

/// Snapshot of the process environment taken at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    backend: Option<String>,
}

impl Environment {
    /// Capture the current process environment.
    ///
    /// Reads `BACKEND` fresh on every call; repeated captures observe
    /// changes to the variable.
    pub fn capture() -> Self {
        Self {
            backend: std::env::var(BACKEND_VAR).ok(),
        }
    }

    /// Build a snapshot with an explicit backend address
    pub fn with_backend(backend: impl Into<String>) -> Self {
        Self {
            backend: Some(backend.into()),
        }
    }

    /// Raw backend address, if the variable was set. Not validated here;
    /// the dev server's proxy interprets it at request time.
    pub fn backend(&self) -> Option<&str> {
        self.backend.as_deref()
    }
}

/// Resolve the complete [`BuildConfig`] for one bundler invocation.
///
/// `serve` is true for interactive dev-server sessions and false for
/// one-shot builds. It drives everything mode-dependent: the Elm loader
/// chain gains the hot-reload wrapper and drops `--optimize` when serving,
/// and stats verbosity tightens to errors-and-warnings.
pub fn resolve(serve: bool, env: &Environment) -> BuildConfig {
    let mode = if serve {
        BuildMode::Development
    } else {
        BuildMode::Production
    };

    let elm = Loader::Elm(ElmOptions {
        debug: false,
        optimize: !serve,
    });
    let elm_chain = if serve {
        vec![Loader::ElmHot, elm]
    } else {
        vec![elm]
    };

    let mut proxy = IndexMap::new();
    proxy.insert(
        PING_PREFIX.to_string(),
        ProxyRule {
            target: env.backend().map(str::to_owned),
            change_origin: true,
        },
    );

    tracing::debug!(
        ?mode,
        backend_set = env.backend().is_some(),
        "resolved build configuration"
    );

    BuildConfig {
        mode,
        entry: PathBuf::from("src/index.js"),
        output: OutputOptions::default(),
        stats: if serve {
            StatsLevel::ErrorsWarnings
        } else {
            StatsLevel::Normal
        },
        infrastructure_log_level: LogLevel::Warn,
        dev_server: DevServerOptions {
            port: 8000,
            hot: HotMode::Only,
            proxy,
        },
        rules: vec![
            ModuleRule {
                test: vec!["elm".into()],
                exclude: vec!["elm-stuff".into(), "node_modules".into()],
                handler: RuleHandler::Loaders(elm_chain),
            },
            ModuleRule {
                test: vec!["woff".into(), "woff2".into(), "ttf".into()],
                exclude: vec![],
                handler: RuleHandler::AssetInline,
            },
            ModuleRule {
                test: vec!["css".into()],
                exclude: vec![],
                handler: RuleHandler::Loaders(vec![Loader::StyleInject, Loader::Css]),
            },
        ],
        plugins: vec![BuiltinPlugin::NoEmitOnErrors],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_serve_flag() {
        let env = Environment::default();
        assert_eq!(resolve(true, &env).mode, BuildMode::Development);
        assert_eq!(resolve(false, &env).mode, BuildMode::Production);
    }

    #[test]
    fn proxy_passes_backend_through_unvalidated() {
        let env = Environment::with_backend("not a url at all");
        let config = resolve(false, &env);
        let rule = &config.dev_server.proxy[PING_PREFIX];
        assert_eq!(rule.target.as_deref(), Some("not a url at all"));
        assert!(rule.change_origin);
    }

    #[test]
    fn missing_backend_stays_missing() {
        let config = resolve(true, &Environment::default());
        assert!(config.dev_server.proxy[PING_PREFIX].target.is_none());
    }

    #[test]
    fn rules_are_static_across_modes() {
        let env = Environment::default();
        let dev = resolve(true, &env);
        let prod = resolve(false, &env);

        assert_eq!(dev.rules.len(), 3);
        assert_eq!(dev.rules.len(), prod.rules.len());
        // Only the Elm chain differs between modes
        assert_eq!(dev.rules[1], prod.rules[1]);
        assert_eq!(dev.rules[2], prod.rules[2]);
        assert_ne!(dev.rules[0], prod.rules[0]);
    }
}
