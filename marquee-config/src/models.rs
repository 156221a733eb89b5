use std::path::PathBuf;
use std::time::Duration;

use marquee_model::ImageUrls;

/// Public TMDB v3 endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Default search debounce.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote API settings.
    pub api: ApiConfig,
    /// Browsing behaviour.
    pub browse: BrowseConfig,
    /// Local persistence.
    pub storage: StorageConfig,
    /// Provenance.
    pub metadata: ConfigMetadata,
}

/// Remote API settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Validated base URL without a trailing slash.
    pub base_url: String,
    /// Validated image host prefix.
    pub image_base_url: String,
    /// Sent as `api_key` when set.
    pub api_key: Option<String>,
    /// Grid poster placeholder URL.
    pub grid_placeholder: String,
    /// Detail poster placeholder URL.
    pub detail_placeholder: String,
}

impl ApiConfig {
    /// Poster resolver for these settings.
    pub fn image_urls(&self) -> ImageUrls {
        ImageUrls::new(self.image_base_url.clone())
            .with_placeholders(self.grid_placeholder.clone(), self.detail_placeholder.clone())
    }
}

/// Browsing behaviour.
#[derive(Debug, Clone, Copy)]
pub struct BrowseConfig {
    /// Quiet interval before a search fires.
    pub search_debounce: Duration,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

/// Local persistence.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Explicit preferences file; `None` means the platform config dir.
    pub preferences_path: Option<PathBuf>,
}

/// Where the configuration came from, for startup logging.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    /// TOML file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Whether a `.env` file was applied.
    pub env_file_loaded: bool,
}
