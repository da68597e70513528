//! # codeckit
//!
//! Read-only metadata toolkit for native image codec components.
//!
//! A [`CodecInfo`] fronts one installed encoder or decoder component and
//! exposes its descriptive properties (container format identifier, author,
//! versions, friendly name, device strings, MIME types, file extensions)
//! plus three capability flags (animation, lossless, multi-frame).
//!
//! Native-backed instances marshal every string out of the component with
//! its two-phase size-then-fill query and surface failing result codes
//! unchanged. Instances without native backing serve the
//! [`CustomProperties`] overrides they were built with and fail everything
//! else. Every read is gated by an [`AccessPolicy`] before the backing is
//! touched.
//!
//! ```toml
//! [dependencies]
//! codeckit = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use codeckit::{CodecInfo, CodecVersion, CustomProperties};
//!
//! let info = CodecInfo::custom(
//!     CustomProperties::default()
//!         .with_friendly_name("Example PNG Encoder")
//!         .with_version(CodecVersion::new(1, 0))
//!         .with_mime_types("image/png"),
//! );
//!
//! assert_eq!(info.friendly_name()?, "Example PNG Encoder");
//! assert!(info.author().is_err()); // no override supplied
//! # Ok::<(), codeckit::CodecInfoError>(())
//! ```
//!
//! Backing a `CodecInfo` with a real component means implementing
//! [`NativeCodecInfo`] over the component handle and handing it to
//! [`CodecInfo::from_native`]; the instance owns the handle and releases it
//! on drop.

pub mod core;
pub mod info;
pub mod native;

pub use crate::core::error::{CodecInfoError, CodecResult};
pub use crate::core::format::ContainerFormat;
pub use crate::core::version::CodecVersion;
pub use crate::info::access::{AccessPolicy, AllowAll};
pub use crate::info::custom::CustomProperties;
pub use crate::info::CodecInfo;
pub use crate::native::component::NativeCodecInfo;
pub use crate::native::status::NativeStatus;
