//! Error types for profile generation.

use thiserror::Error;

/// Primary error type for profile generation.
#[derive(Error, Debug)]
pub enum GenError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // Action errors
    #[error("Twitch title \"{title}\" is too long to set via Stream Deck ({len} > {max} characters)")]
    TitleTooLong { title: String, len: usize, max: usize },

    // Generator errors
    #[error("Unknown generator '{name}' (available: {})", .available.join(", "))]
    UnknownGenerator {
        name: String,
        available: Vec<&'static str>,
    },

    // Identifier errors
    #[error("Invalid profile id '{value}': {reason}")]
    InvalidProfileId { value: String, reason: String },

    // Archive errors
    #[error("Archive error: {0}")]
    Archive(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl GenError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigInvalid(_)
                | Self::TitleTooLong { .. }
                | Self::UnknownGenerator { .. }
                | Self::InvalidProfileId { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("Check the path passed to --config"),
            Self::TitleTooLong { .. } => Some("Shorten the event name or the game title"),
            Self::UnknownGenerator { .. } => Some("Run: sdgen generators"),
            Self::InvalidProfileId { .. } => {
                Some("Use the textual UUID form, e.g. 33860c96-e0d7-48dd-a8cc-471a027a4822")
            }
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for GenError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e.to_string())
    }
}

/// Convenience type alias for Results using GenError.
pub type Result<T> = std::result::Result<T, GenError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| GenError::Other(format!("{}: {e}", f().into())))
    }
}
