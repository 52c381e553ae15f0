//! Errors returned by namespace operations

use ns_model::PathError;
use thiserror::Error;

/// Errors that can occur during namespace operations
///
/// Every variant reflects an invalid request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// A path did not resolve
    #[error("Not found: {0}")]
    NotFound(String),

    /// A sibling with the same name already exists
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The request would break the tree structure
    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    /// Content access on something that is not a text file
    #[error("Not a text file: {0}")]
    NotATextFile(String),

    /// Cached state disagrees with the tree (reported by consistency checks)
    #[error("Inconsistent namespace: {0}")]
    Inconsistent(String),
}

impl From<PathError> for NamespaceError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath(path) | PathError::NoParent(path) => {
                NamespaceError::NotFound(path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NamespaceError::NotFound("C:\\docs".to_string());
        assert_eq!(err.to_string(), "Not found: C:\\docs");

        let err = NamespaceError::NotATextFile("C:\\docs".to_string());
        assert_eq!(err.to_string(), "Not a text file: C:\\docs");
    }

    #[test]
    fn test_path_error_conversion() {
        let err: NamespaceError = PathError::NoParent("C:".to_string()).into();
        assert_eq!(err, NamespaceError::NotFound("C:".to_string()));

        let err: NamespaceError = PathError::InvalidPath("Empty path".to_string()).into();
        assert!(matches!(err, NamespaceError::NotFound(_)));
    }
}
