use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file location.
pub const ENV_CONFIG_PATH: &str = "MARQUEE_CONFIG";
/// TMDB API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";
/// API base URL override.
pub const ENV_API_BASE_URL: &str = "MARQUEE_API_BASE_URL";
/// Image host override.
pub const ENV_IMAGE_BASE_URL: &str = "MARQUEE_IMAGE_BASE_URL";
/// Search debounce in milliseconds.
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "MARQUEE_SEARCH_DEBOUNCE_MS";
/// Preferences file override.
pub const ENV_PREFERENCES_PATH: &str = "MARQUEE_PREFERENCES_PATH";

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    /// `[api]`
    #[serde(default)]
    pub api: FileApiConfig,
    /// `[browse]`
    #[serde(default)]
    pub browse: FileBrowseConfig,
    /// `[storage]`
    #[serde(default)]
    pub storage: FileStorageConfig,
}

/// `[api]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileApiConfig {
    /// TMDB v3 base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Image host prefix for poster paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// TMDB API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Grid poster placeholder URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_placeholder: Option<String>,
    /// Detail poster placeholder URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_placeholder: Option<String>,
}

/// `[browse]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileBrowseConfig {
    /// Search debounce in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_debounce_ms: Option<u64>,
}

/// `[storage]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileStorageConfig {
    /// Preferences file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
}

/// Values read from the process environment.
///
/// Empty values count as unset. The debounce interval is kept raw so the
/// loader can report a malformed value instead of silently ignoring it.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// `MARQUEE_CONFIG`
    pub config_path: Option<PathBuf>,
    /// `TMDB_API_KEY`
    pub api_key: Option<String>,
    /// `MARQUEE_API_BASE_URL`
    pub api_base_url: Option<String>,
    /// `MARQUEE_IMAGE_BASE_URL`
    pub image_base_url: Option<String>,
    /// `MARQUEE_SEARCH_DEBOUNCE_MS`, unparsed
    pub search_debounce_ms: Option<String>,
    /// `MARQUEE_PREFERENCES_PATH`
    pub preferences_path: Option<PathBuf>,
}

impl EnvConfig {
    /// Read from the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            config_path: var(ENV_CONFIG_PATH).map(PathBuf::from),
            api_key: var(ENV_API_KEY),
            api_base_url: var(ENV_API_BASE_URL),
            image_base_url: var(ENV_IMAGE_BASE_URL),
            search_debounce_ms: var(ENV_SEARCH_DEBOUNCE_MS),
            preferences_path: var(ENV_PREFERENCES_PATH).map(PathBuf::from),
        }
    }
}
