// src/config.rs
//
// Runtime configuration
//
// Values come from the environment with sensible defaults. Nothing here
// fails: a missing token only surfaces later as an API authorization error.

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const APP_DIR_NAME: &str = "moviehub";

/// Token variables, first match wins
const TOKEN_VARS: [&str; 2] = ["TMDB_TOKEN", "VITE_TMDB_TOKEN"];

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Bearer token for the metadata service
    pub api_token: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
    /// Directory holding the local database
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (environment, test map...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        match TOKEN_VARS.iter().find_map(|key| get(*key)) {
            Some(token) => cfg.api_token = token,
            None => warn!(
                "No API token found in {}; requests will be rejected by the movie service",
                TOKEN_VARS.join(" or ")
            ),
        }

        if let Some(url) = get("MOVIEHUB_API_BASE_URL") {
            cfg.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("MOVIEHUB_IMAGE_BASE_URL") {
            cfg.image_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(language) = get("MOVIEHUB_LANGUAGE") {
            cfg.language = language;
        }
        if let Some(raw) = get("MOVIEHUB_TIMEOUT_SECS") {
            cfg.request_timeout_secs =
                parse_or_default("MOVIEHUB_TIMEOUT_SECS", &raw, DEFAULT_TIMEOUT_SECS);
        }
        if let Some(dir) = get("MOVIEHUB_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }

        info!(
            "Configuration loaded (api: {}, language: {}, data dir: {})",
            cfg.api_base_url,
            cfg.language,
            cfg.data_dir.display()
        );

        cfg
    }

    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }

    /// Path of the SQLite file backing favorites and watchlist
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", APP_DIR_NAME))
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn parse_or_default<T: FromStr + std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("Invalid value `{}` for {}; using {}", raw, key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let cfg = config_from(&[]);
        assert!(!cfg.has_token());
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.language, "en-US");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.database_path().ends_with("moviehub/moviehub.db"));
    }

    #[test]
    fn test_token_fallback_order() {
        let cfg = config_from(&[("VITE_TMDB_TOKEN", "vite-token")]);
        assert_eq!(cfg.api_token, "vite-token");

        let cfg = config_from(&[("TMDB_TOKEN", "main"), ("VITE_TMDB_TOKEN", "vite")]);
        assert_eq!(cfg.api_token, "main");

        let cfg = config_from(&[("TMDB_TOKEN", "   "), ("VITE_TMDB_TOKEN", "vite")]);
        assert_eq!(cfg.api_token, "vite");
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[
            ("MOVIEHUB_API_BASE_URL", "http://127.0.0.1:8080/3/"),
            ("MOVIEHUB_LANGUAGE", "pt-BR"),
            ("MOVIEHUB_TIMEOUT_SECS", "5"),
            ("MOVIEHUB_DATA_DIR", "/tmp/moviehub-test"),
        ]);
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:8080/3");
        assert_eq!(cfg.language, "pt-BR");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(
            cfg.database_path(),
            PathBuf::from("/tmp/moviehub-test/moviehub.db")
        );
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let cfg = config_from(&[("MOVIEHUB_TIMEOUT_SECS", "soon")]);
        assert_eq!(cfg.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
