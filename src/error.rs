//! Custom error types for GigForge
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for GigForge operations
#[derive(Error, Debug)]
pub enum GigForgeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (items, colours, sizes)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Template lookup or rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Document serialization errors (PDF, PNG)
    #[error("Render error: {0}")]
    Render(String),

    /// Generation history errors
    #[error("History error: {0}")]
    History(String),
}

impl GigForgeError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a render error
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

impl From<std::io::Error> for GigForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GigForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<minijinja::Error> for GigForgeError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<lopdf::Error> for GigForgeError {
    fn from(err: lopdf::Error) -> Self {
        Self::Render(format!("PDF: {}", err))
    }
}

impl From<image::ImageError> for GigForgeError {
    fn from(err: image::ImageError) -> Self {
        Self::Render(format!("PNG: {}", err))
    }
}

/// Result type alias for GigForge operations
pub type GigForgeResult<T> = Result<T, GigForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GigForgeError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = GigForgeError::Validation("bad item".into());
        assert_eq!(err.to_string(), "Validation error: bad item");
        assert!(err.is_validation());
        assert!(!err.is_render());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GigForgeError = io_err.into();
        assert!(matches!(err, GigForgeError::Io(_)));
    }

    #[test]
    fn test_from_template_error() {
        let tmpl_err = minijinja::Error::new(minijinja::ErrorKind::TemplateNotFound, "missing.j2");
        let err: GigForgeError = tmpl_err.into();
        assert!(matches!(err, GigForgeError::Template(_)));
    }
}
