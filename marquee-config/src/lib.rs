//! Configuration loading for Marquee.
//!
//! Values resolve as built-in defaults, then a TOML file (explicit path,
//! `MARQUEE_CONFIG`, or `marquee.toml` / `config/marquee.toml`), then
//! environment variables, optionally seeded from a `.env` file.

/// Precedence resolution and validation.
pub mod loader;
/// The resolved configuration.
pub mod models;
/// Raw file and environment inputs.
pub mod sources;
/// Soft problems reported at startup.
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{ApiConfig, BrowseConfig, Config, ConfigMetadata, StorageConfig};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
