//! Persisted UI preferences.
//!
//! Only the theme survives a restart. It is stored as a small JSON document
//! (`{"theme":"dark"}`) under the platform config directory unless an
//! explicit path is given.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use marquee_model::Theme;
use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

/// File name under the config directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Theme,
}

/// Handle on the preferences file; nothing is cached.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store rooted in the platform config directory.
    pub fn from_project_dirs() -> Result<Self, PreferenceError> {
        let dirs = ProjectDirs::from("", "marquee", "marquee")
            .ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::at(dirs.config_dir().join(PREFERENCES_FILE)))
    }

    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current theme; a missing file means [`Theme::Light`].
    pub async fn theme(&self) -> Result<Theme, PreferenceError> {
        Ok(self.load().await?.theme)
    }

    /// Persist `theme`.
    pub async fn set_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        let mut prefs = self.load().await?;
        prefs.theme = theme;
        self.save(&prefs).await?;
        tracing::debug!(path = %self.path.display(), %theme, "theme saved");
        Ok(())
    }

    /// Flip the theme and persist it, returning the new value.
    pub async fn toggle_theme(&self) -> Result<Theme, PreferenceError> {
        let next = self.theme().await?.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }

    async fn load(&self) -> Result<StoredPreferences, PreferenceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredPreferences::default());
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| PreferenceError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, prefs: &StoredPreferences) -> Result<(), PreferenceError> {
        let io_error = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let json = serde_json::to_string(prefs).map_err(|source| PreferenceError::Decode {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, json).await.map_err(io_error)
    }
}
