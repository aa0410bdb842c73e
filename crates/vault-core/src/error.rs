use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VaultError {
    /// Transient failures that leave state untouched and may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VaultError::Network(_) | VaultError::Timeout(_))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        VaultError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(VaultError::Network("offline".into()).is_retryable());
        assert!(VaultError::Timeout("create folder".into()).is_retryable());
        assert!(!VaultError::validation("name is required").is_retryable());
        assert!(!VaultError::NotFound("folder 9".into()).is_retryable());
    }

    #[test]
    fn test_display_includes_context() {
        let err = VaultError::validation("title is required");
        assert_eq!(err.to_string(), "Validation error: title is required");
    }
}
