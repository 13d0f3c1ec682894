//! Tests for default values and serialized shapes.

use alder_config::{
    BuildConfig, BuildMode, BuiltinPlugin, DevServerOptions, HotMode, LogLevel, OutputOptions,
    ProxyRule, StatsLevel,
};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn build_config_defaults() {
    let config = BuildConfig::default();
    assert_eq!(config.mode, BuildMode::Development);
    assert_eq!(config.entry, PathBuf::from("src/index.js"));
    assert_eq!(config.stats, StatsLevel::Normal);
    assert_eq!(config.infrastructure_log_level, LogLevel::Warn);
    assert!(config.rules.is_empty());
    assert!(config.plugins.is_empty());
}

#[test]
fn output_options_defaults() {
    let output = OutputOptions::default();
    assert_eq!(output.dir, PathBuf::from("public"));
    assert_eq!(output.filename, "bundle.js");
    assert_eq!(output.public_path, "/");
}

#[test]
fn dev_server_defaults() {
    let dev = DevServerOptions::default();
    assert_eq!(dev.port, 8000);
    assert_eq!(dev.hot, HotMode::Only);
    assert!(dev.proxy.is_empty());
}

#[test]
fn proxy_rule_defaults() {
    let rule = ProxyRule::default();
    assert!(rule.target.is_none());
    assert!(!rule.change_origin);
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(BuildMode::Development).unwrap(),
        json!("development")
    );
    assert_eq!(
        serde_json::to_value(BuildMode::Production).unwrap(),
        json!("production")
    );
}

#[test]
fn stats_level_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(StatsLevel::ErrorsWarnings).unwrap(),
        json!("errors-warnings")
    );
    assert_eq!(
        serde_json::to_value(StatsLevel::Normal).unwrap(),
        json!("normal")
    );
}

#[test]
fn hot_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_value(HotMode::Only).unwrap(), json!("only"));
    assert_eq!(serde_json::to_value(HotMode::Off).unwrap(), json!("off"));
}

#[test]
fn plugin_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(BuiltinPlugin::NoEmitOnErrors).unwrap(),
        json!("no-emit-on-errors")
    );
}

#[test]
fn value_round_trip_preserves_config() {
    let mut config = BuildConfig::default();
    config.mode = BuildMode::Production;
    config.plugins = vec![BuiltinPlugin::NoEmitOnErrors];
    config
        .dev_server
        .proxy
        .insert("/api".into(), ProxyRule::default());

    let restored = BuildConfig::from_value(config.to_value().unwrap()).unwrap();
    assert_eq!(restored.mode, BuildMode::Production);
    assert_eq!(restored.plugins, vec![BuiltinPlugin::NoEmitOnErrors]);
    assert!(restored.dev_server.proxy.contains_key("/api"));
}

#[test]
fn empty_value_yields_defaults() {
    let config = BuildConfig::from_value(json!({})).unwrap();
    assert_eq!(config.entry, PathBuf::from("src/index.js"));
    assert_eq!(config.dev_server.port, 8000);
}
