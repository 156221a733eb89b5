use std::fmt::{self, Display};

/// Errors produced while interpreting filter controls and other user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Neither a genre id nor a known genre name.
    InvalidGenre(String),
    /// Not a four-digit year.
    InvalidYear(String),
    /// Neither `light` nor `dark`.
    InvalidTheme(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidGenre(value) => {
                write!(f, "unknown genre '{value}'")
            }
            ModelError::InvalidYear(value) => {
                write!(f, "invalid release year '{value}'")
            }
            ModelError::InvalidTheme(value) => {
                write!(f, "unknown theme '{value}', expected light or dark")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for model parsing.
pub type Result<T> = std::result::Result<T, ModelError>;
