//! Result codes returned by native codec components

use std::fmt;

use crate::core::error::{CodecInfoError, CodecResult};

/// Signed 32-bit result code returned by every native query call.
///
/// Non-negative values report success and negative values report failure,
/// following the HRESULT convention of the component ABI this crate fronts.
/// Failure codes are surfaced to callers unchanged inside
/// [`CodecInfoError::NativeQuery`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeStatus(pub i32);

impl NativeStatus {
    /// Generic success.
    pub const OK: NativeStatus = NativeStatus(0);
    /// Unspecified failure.
    pub const FAIL: NativeStatus = NativeStatus(0x80004005u32 as i32);
    /// One or more arguments are invalid.
    pub const INVALID_ARG: NativeStatus = NativeStatus(0x80070057u32 as i32);
    /// The supplied buffer is too small for the data.
    pub const INSUFFICIENT_BUFFER: NativeStatus = NativeStatus(0x8007007au32 as i32);

    /// Whether this code reports success.
    pub fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// Translate this code into a result, carrying the raw code on failure.
    pub fn ok(self) -> CodecResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(CodecInfoError::NativeQuery(self.0))
        }
    }
}

impl fmt::Display for NativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes() {
        assert!(NativeStatus::OK.is_success());
        assert!(NativeStatus(1).is_success());
        assert!(NativeStatus::OK.ok().is_ok());
    }

    #[test]
    fn test_failure_carries_code() {
        let err = NativeStatus::FAIL.ok().unwrap_err();
        assert!(matches!(err, CodecInfoError::NativeQuery(code) if code == NativeStatus::FAIL.0));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(NativeStatus::INVALID_ARG.to_string(), "0x80070057");
        assert_eq!(NativeStatus::OK.to_string(), "0x00000000");
    }
}
