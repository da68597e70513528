//! Error types for codec metadata operations
//!
//! This module defines all error types used throughout the toolkit.

use thiserror::Error;

/// Error types for codec metadata operations
#[derive(Debug, Error)]
pub enum CodecInfoError {
    /// Caller is not authorized to read codec metadata
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Property not supplied by an instance without native backing
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The native component reported a failing result code
    #[error("Native query failed with status {0:#010x}")]
    NativeQuery(i32),

    /// A retrieved version string did not parse as a dotted version
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),
}

/// Result type alias for codec metadata operations
pub type CodecResult<T> = Result<T, CodecInfoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecInfoError::AccessDenied("codec metadata read".to_string());
        assert!(err.to_string().contains("Access denied: codec metadata read"));
    }

    #[test]
    fn test_native_query_displays_hex_code() {
        let err = CodecInfoError::NativeQuery(0x80004005u32 as i32);
        assert_eq!(err.to_string(), "Native query failed with status 0x80004005");
    }
}
