//! Error types at the crate's boundaries.

use std::path::PathBuf;

use marquee_model::ModelError;
use thiserror::Error;

/// The single failure kind at the network boundary.
///
/// Connectivity problems, non-success statuses and undecodable payloads all
/// collapse into this one type; the endpoint and reason exist for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to fetch {endpoint}: {reason}")]
pub struct FetchError {
    endpoint: String,
    reason: String,
}

impl FetchError {
    /// Failure of `endpoint` for `reason`.
    pub fn new(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Endpoint path, e.g. `discover/movie`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Transport, status or decode detail.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Reading or writing the preferences file failed.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The platform has no config directory.
    #[error("unable to determine a config directory for preferences")]
    NoConfigDir,

    /// Filesystem failure.
    #[error("failed to access preferences at {path}")]
    Io {
        /// Preferences file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid preferences JSON.
    #[error("malformed preferences file {path}")]
    Decode {
        /// Preferences file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A filter control value that could not be turned into a selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// Not a genre id or known genre name.
    #[error("unknown genre {0:?}")]
    UnknownGenre(String),

    /// Not `all` or four digits.
    #[error("malformed year {0:?}, expected four digits")]
    MalformedYear(String),

    /// Any other model rejection.
    #[error("{0}")]
    Other(String),
}

impl From<ModelError> for FilterParseError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::InvalidGenre(value) => FilterParseError::UnknownGenre(value),
            ModelError::InvalidYear(value) => FilterParseError::MalformedYear(value),
            other => FilterParseError::Other(other.to_string()),
        }
    }
}
