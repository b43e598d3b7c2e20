// Rust guideline compliant 2026-10-18

//! Response envelopes for command and event outputs.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Name of the action that produced the result.
    pub action: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(action: &'static str, result: T) -> Self {
        Self {
            status: "ok",
            action,
            result,
        }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Whether new input can correct the error.
    pub recoverable: bool,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            recoverable: error.is_recoverable(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderboard_core::Error as CoreError;

    #[test]
    fn test_error_envelope_for_invalid_column() {
        let error = AppError::from(CoreError::InvalidColumn("Kitchen".to_string()));
        let value = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();
        assert_eq!(value["code"], "invalid_column");
        assert_eq!(value["recoverable"], false);
        assert_eq!(value["details"]["column"], "Kitchen");
        assert_eq!(value["details"]["allowed"][1], "Ready");
    }

    #[test]
    fn test_validation_error_is_recoverable() {
        let error = AppError::from(CoreError::Validation("text cannot be empty".to_string()));
        let envelope = ErrorEnvelope::from_error(&error);
        assert_eq!(envelope.code, ErrorCode::ValidationError);
        assert!(envelope.recoverable);
        assert!(envelope.details.is_none());
    }

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(SuccessEnvelope::new("delete", "ord-abc123")).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["action"], "delete");
        assert_eq!(value["result"], "ord-abc123");
    }
}
