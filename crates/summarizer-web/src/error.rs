/// Error types for the summarizer web interface

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A user-input problem tied to a specific form field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = WebError::config("missing site address");
        assert_eq!(err.to_string(), "Configuration error: missing site address");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: WebError = io.into();
        assert!(matches!(err, WebError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = ValidationError::new("text", "Text is required");
        assert_eq!(err.field, "text");
        assert_eq!(err.to_string(), "Text is required");
    }
}
