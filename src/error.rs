//! Error types and handling for the hazewatch library

use thiserror::Error;

/// Main error type for the hazewatch library
#[derive(Error, Debug)]
pub enum HazewatchError {
    /// The raw snapshot payload could not be decoded
    #[error("Malformed snapshot data: {message}")]
    MalformedData { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl HazewatchError {
    /// Create a new malformed-data error
    pub fn malformed_data<S: Into<String>>(message: S) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HazewatchError::MalformedData { .. } => {
                "The air-quality snapshot could not be read. The data source may have changed its format.".to_string()
            }
            HazewatchError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            HazewatchError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for HazewatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData {
            message: err.to_string(),
        }
    }
}
