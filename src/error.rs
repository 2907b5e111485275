//! Error types for the color_dominance library

use thiserror::Error;

/// Result type alias for color_dominance operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for dominant-color analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No decoder could be located for the given input
    #[error("No decoder available for input: {path}")]
    DecoderUnavailable { path: String },

    /// Zero pixels passed the alpha-retention threshold
    #[error("No pixels passed the alpha threshold; nothing to analyze")]
    EmptyInput,

    /// Invalid configuration value
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::DecoderUnavailable { .. } => {
                "This image format is not supported.".to_string()
            }
            AnalysisError::EmptyInput => {
                "The image is fully transparent; there are no colors to analyze.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("Configuration value out of range: {} = {}", parameter, value)
            }
        }
    }
}
