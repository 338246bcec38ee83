//! Error types for the theme_sampler library

use thiserror::Error;

/// Result type alias for theme_sampler operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Error types for theme derivation operations
///
/// The derivation pipeline is deliberately fail-open: a broken background
/// image must never block the hosting application. `init_dynamic_theme`
/// absorbs every variant below; `compute_theme` surfaces them so callers
/// can choose to log or degrade visibly.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Image reference could not be fetched or decoded
    #[error("Image unavailable: {message}")]
    ResourceUnavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Every sampled pixel was filtered out (fully transparent or
    /// entirely extreme-luminance image)
    #[error("No representative color: all sampled pixels were filtered out")]
    NoRepresentativeColor,

    /// Pixel buffer shape does not match its data
    #[error("Invalid pixel buffer: {reason}")]
    InvalidBuffer { reason: String },

    /// Color string could not be parsed
    #[error("Invalid color: {reason}")]
    InvalidColor { reason: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ThemeError {
    /// Create a resource-unavailable error with context
    pub fn resource_unavailable<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ResourceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a resource-unavailable error without an underlying cause
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is an expected "leave the theme unchanged"
    /// condition rather than a programming or configuration mistake
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            ThemeError::ResourceUnavailable { .. } | ThemeError::NoRepresentativeColor
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ThemeError::ResourceUnavailable { .. } => {
                "Could not load the background image. The default theme stays active.".to_string()
            }
            ThemeError::NoRepresentativeColor => {
                "The background image has no usable color content. The default theme stays active."
                    .to_string()
            }
            ThemeError::Config { .. } => {
                "The theme configuration could not be read. Using built-in defaults.".to_string()
            }
            _ => "Theme derivation failed. The default theme stays active.".to_string(),
        }
    }
}
