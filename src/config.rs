//! Runtime configuration for the theme scripts.
//!
//! DESIGN
//! ======
//! Every name the scripts touch (cookie, CSS class, host variables, pane ids)
//! lives here with the site's defaults, so a page can override individual
//! entries with a small JSON object and leave the rest alone.

use serde::Deserialize;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Host framework variable names mirrored by the controllers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VariableNames {
    pub dark_mode: String,
    pub system_dark_mode: String,
    pub follow_system_dark_mode: String,
    pub is_fallback: String,
    pub translation_diff_open: String,
}

impl Default for VariableNames {
    fn default() -> Self {
        Self {
            dark_mode: "ftd#dark-mode".to_owned(),
            system_dark_mode: "ftd#system-dark-mode".to_owned(),
            follow_system_dark_mode: "ftd#follow-system-dark-mode".to_owned(),
            is_fallback: "fpm#is-fallback".to_owned(),
            translation_diff_open: "fpm#translation-diff-open".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    /// Class toggled on `<body>`; stylesheets key their dark rules off it.
    pub dark_class: String,
    pub media_query: String,
    pub main_pane_id: String,
    pub fallback_pane_id: String,
    pub view_source_key: String,
    pub variables: VariableNames,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cookie_name: "fastn-dark-mode".to_owned(),
            cookie_path: "/".to_owned(),
            dark_class: "dark".to_owned(),
            media_query: "(prefers-color-scheme: dark)".to_owned(),
            main_pane_id: "main".to_owned(),
            fallback_pane_id: "fallback".to_owned(),
            view_source_key: ".".to_owned(),
            variables: VariableNames::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
