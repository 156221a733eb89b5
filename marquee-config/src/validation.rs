use super::models::Config;

/// One soft configuration problem.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What is wrong.
    pub message: String,
    /// How to fix it.
    pub hint: Option<String>,
}

/// Soft problems: the configuration loads but something will not work well.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Warnings in discovery order.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Record a warning with a remedy.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// No warnings recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recorded warnings.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for warning in &self.items {
            match &warning.hint {
                Some(hint) => {
                    tracing::warn!(message = %warning.message, hint = %hint, "configuration warning")
                }
                None => {
                    tracing::warn!(message = %warning.message, "configuration warning")
                }
            }
        }
    }
}

/// Inspect a resolved configuration for soft problems.
pub fn collect_warnings(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.api.api_key.is_none() {
        warnings.push_with_hint(
            "No TMDB API key configured; requests will be rejected by the API",
            "Set TMDB_API_KEY or api.api_key in marquee.toml",
        );
    }

    if config.browse.search_debounce.is_zero() {
        warnings.push("Search debounce is 0 ms; every keystroke issues a request");
    }

    warnings
}
