//! Authorization gate for metadata access

use crate::core::error::CodecResult;

/// Authorization check consulted before any metadata is handed out.
///
/// Every property getter on [`CodecInfo`](crate::CodecInfo) runs this check
/// first and aborts on denial before the backing is even inspected, so an
/// unauthorized caller cannot probe whether an instance is native-backed.
pub trait AccessPolicy: Send + Sync {
    /// Check that the caller may read codec metadata.
    ///
    /// Return an error (conventionally
    /// [`CodecInfoError::AccessDenied`](crate::CodecInfoError::AccessDenied))
    /// to abort the read.
    fn check_metadata_read(&self) -> CodecResult<()>;
}

/// Policy that grants every request.
///
/// Used by instances constructed without an explicit policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check_metadata_read(&self) -> CodecResult<()> {
        Ok(())
    }
}
