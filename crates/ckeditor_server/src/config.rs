//! Server configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 38420;

/// URL prefix the editor scripts are served from when
/// `CKEDITOR_BASE_PATH` is unset.
pub const DEFAULT_BASE_PATH: &str = "/ckeditor/";

/// Location of jQuery when `JQUERY_PATH` is unset.
pub const DEFAULT_JQUERY_PATH: &str = "/js/jquery.js";

/// Runtime configuration for the editor server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// JSON file with [`EditorSettings`](ckeditor_core::EditorSettings).
    pub settings_path: Option<PathBuf>,
    /// Always ends with `/`.
    pub base_path: String,
    pub jquery_path: String,
    pub allow_public_access: bool,
    /// Raw `BIND` override, validated by [`resolve_bind_address`](crate::resolve_bind_address).
    pub bind: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            settings_path: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            jquery_path: DEFAULT_JQUERY_PATH.to_string(),
            allow_public_access: false,
            bind: None,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment. Missing or unrecognized
/// values are `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

/// Ensure a URL prefix ends with exactly one `/`.
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            settings_path: non_empty_var("EDITOR_SETTINGS").map(PathBuf::from),
            base_path: non_empty_var("CKEDITOR_BASE_PATH")
                .map(|path| normalize_base_path(&path))
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            jquery_path: non_empty_var("JQUERY_PATH")
                .unwrap_or_else(|| DEFAULT_JQUERY_PATH.to_string()),
            allow_public_access: env_flag_enabled("ALLOW_PUBLIC_ACCESS"),
            bind: non_empty_var("BIND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn base_path_gets_single_trailing_slash() {
        assert_eq!(normalize_base_path("/static/ckeditor"), "/static/ckeditor/");
        assert_eq!(normalize_base_path("/static/ckeditor//"), "/static/ckeditor/");
        assert_eq!(normalize_base_path(""), "/");
    }

    #[test]
    fn default_config_is_loopback_friendly() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.base_path, "/ckeditor/");
        assert!(!config.allow_public_access);
        assert!(config.bind.is_none());
    }
}
