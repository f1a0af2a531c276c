//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// None of these escape the analysis entry points: the engines convert
/// every inference failure into their deterministic fallback. The type
/// exists for the inference port boundary and internal logging.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Response from the AI backend could not be used
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Inference(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_errors_are_retryable() {
        assert!(ApplicationError::Inference("timeout".to_string()).is_retryable());
        assert!(!ApplicationError::InvalidResponse("bad json".to_string()).is_retryable());
        assert!(!ApplicationError::Internal("oops".to_string()).is_retryable());
    }

    #[test]
    fn error_messages() {
        let err = ApplicationError::Inference("connection refused".to_string());
        assert_eq!(err.to_string(), "Inference error: connection refused");
    }
}
