use super::*;
use crate::error::ErrorCode;

#[test]
fn defaults_match_site_constants() {
    let config = ThemeConfig::default();
    assert_eq!(config.cookie_name, "fastn-dark-mode");
    assert_eq!(config.cookie_path, "/");
    assert_eq!(config.dark_class, "dark");
    assert_eq!(config.media_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.view_source_key, ".");
    assert_eq!(config.variables.is_fallback, "fpm#is-fallback");
    assert_eq!(config.variables.translation_diff_open, "fpm#translation-diff-open");
}

#[test]
fn empty_object_yields_defaults() {
    let config = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = ThemeConfig::from_json(
        r#"{"cookie_name": "site-theme", "variables": {"dark_mode": "app#dark"}}"#,
    )
    .unwrap();
    assert_eq!(config.cookie_name, "site-theme");
    assert_eq!(config.dark_class, "dark");
    assert_eq!(config.variables.dark_mode, "app#dark");
    assert_eq!(config.variables.system_dark_mode, "ftd#system-dark-mode");
}

#[test]
fn malformed_json_is_config_error() {
    let err = ThemeConfig::from_json("{cookie_name").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
    assert_eq!(err.error_code(), "E_CONFIG");
}
