//! Error types for toolbox
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolbox
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// No tool with the given id exists in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Catalog data violates an invariant or failed to parse
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A clipboard strategy failed to write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, ToolboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_error() {
        let err = ToolboxError::ToolNotFound("json-formatter".to_string());
        assert_eq!(err.to_string(), "Tool not found: json-formatter");
    }

    #[test]
    fn test_invalid_catalog_error() {
        let err = ToolboxError::InvalidCatalog("duplicate tool id 'base64'".to_string());
        assert_eq!(err.to_string(), "Invalid catalog: duplicate tool id 'base64'");
    }

    #[test]
    fn test_clipboard_error() {
        let err = ToolboxError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolboxError = io_err.into();
        assert!(matches!(err, ToolboxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolboxError::ToolNotFound("missing".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
