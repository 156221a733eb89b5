use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

use marquee_model::{DEFAULT_IMAGE_BASE_URL, DETAIL_PLACEHOLDER_URL, GRID_PLACEHOLDER_URL};

use super::{
    models::{
        ApiConfig, BrowseConfig, Config, ConfigMetadata, DEFAULT_API_BASE_URL,
        DEFAULT_SEARCH_DEBOUNCE_MS, StorageConfig,
    },
    sources::{ENV_SEARCH_DEBOUNCE_MS, EnvConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["marquee.toml", "config/marquee.toml"];

/// Inputs that override discovery.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Explicit TOML file; must exist.
    pub config_path: Option<PathBuf>,
    /// `.env` file instead of `./.env`.
    pub env_file: Option<PathBuf>,
}

/// Resolves configuration with precedence defaults < file < environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    /// Loader with default discovery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with explicit options.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Read this TOML file instead of searching.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Read this `.env` file.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env` into the process environment, then resolve.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve against an explicit environment snapshot; `.env` is not read.
    pub fn load_with_env(&self, env: EnvConfig) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let config = compose_config(file_config.unwrap_or_default(), env, config_path)?;
        let warnings = validation::collect_warnings(&config);
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        api: file_api,
        browse: file_browse,
        storage: file_storage,
    } = file;

    let base_url = validate_url(
        "api.base_url",
        env.api_base_url
            .or(file_api.base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
    )?;
    let image_base_url = validate_url(
        "api.image_base_url",
        env.image_base_url
            .or(file_api.image_base_url)
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
    )?;

    let api_key = env
        .api_key
        .or(file_api.api_key)
        .filter(|key| !key.trim().is_empty());

    let debounce_ms = match env.search_debounce_ms {
        Some(raw) => raw.parse::<u64>().map_err(|_| ConfigLoadError::InvalidNumber {
            name: ENV_SEARCH_DEBOUNCE_MS,
            value: raw.clone(),
        })?,
        None => file_browse
            .search_debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
    };

    let config = Config {
        api: ApiConfig {
            base_url,
            image_base_url,
            api_key,
            grid_placeholder: file_api
                .grid_placeholder
                .unwrap_or_else(|| GRID_PLACEHOLDER_URL.to_string()),
            detail_placeholder: file_api
                .detail_placeholder
                .unwrap_or_else(|| DETAIL_PLACEHOLDER_URL.to_string()),
        },
        browse: BrowseConfig {
            search_debounce: Duration::from_millis(debounce_ms),
        },
        storage: StorageConfig {
            preferences_path: env.preferences_path.or(file_storage.preferences_path),
        },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    };

    tracing::debug!(
        base_url = %config.api.base_url,
        config_path = ?config.metadata.config_path,
        debounce_ms,
        "configuration resolved"
    );
    Ok(config)
}

/// Parse and require http(s); trailing slashes are stripped.
fn validate_url(field: &'static str, value: String) -> Result<String, ConfigLoadError> {
    let parsed = Url::parse(value.trim()).map_err(|source| ConfigLoadError::InvalidUrl {
        field,
        value: value.clone(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigLoadError::UnsupportedScheme {
            field,
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(value.trim().trim_end_matches('/').to_string())
}

/// Hard configuration failures.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigLoadError {
    /// An explicitly named file does not exist.
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Bad TOML or an unknown key.
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid URL for {field}: '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme '{scheme}' for {field}; expected http or https")]
    UnsupportedScheme { field: &'static str, scheme: String },
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// A resolved configuration plus its soft problems.
#[derive(Debug)]
pub struct ConfigLoad {
    /// The resolved configuration.
    pub config: Config,
    /// Warnings to log at startup.
    pub warnings: ConfigWarnings,
}
