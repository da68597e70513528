//! The native codec component interface
//!
//! This module defines the trait a native codec-info backend must implement.
//! It mirrors the component call table one method per metadata property, so a
//! backend is a thin shim over the component ABI and a test double is a plain
//! struct.

use crate::core::format::ContainerFormat;
use crate::native::status::NativeStatus;

/// Query interface of one native codec component.
///
/// Every call returns a [`NativeStatus`] and writes its result through an
/// out-parameter, matching the component ABI.
///
/// # String queries
///
/// The eight string methods share a two-phase contract:
///
/// * `buffer.len()` declares the destination capacity in UTF-16 code units.
/// * A call with an empty buffer is a length probe: the component stores the
///   required element count in `actual` and must not write string data.
/// * A call with a non-empty buffer fills it and stores the written element
///   count in `actual`, which may differ from the probed length.
///
/// # Ownership
///
/// An implementation exclusively owns its underlying native resource and
/// releases it in `Drop`. The toolkit never clones, re-seats, or mutates
/// through the handle; all queries are reads.
pub trait NativeCodecInfo: Send + Sync {
    /// Store the container format identifier in `format`.
    fn get_container_format(&self, format: &mut ContainerFormat) -> NativeStatus;

    /// Query the codec author string.
    fn get_author(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the codec version string.
    fn get_version(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the format specification version string.
    fn get_spec_version(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the human-readable codec name.
    fn get_friendly_name(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the device manufacturer string.
    fn get_device_manufacturer(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the comma-separated device model list.
    fn get_device_models(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the comma-separated MIME type list.
    fn get_mime_types(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Query the comma-separated file extension list.
    fn get_file_extensions(&self, buffer: &mut [u16], actual: &mut u32) -> NativeStatus;

    /// Store whether the codec supports animated images in `value`.
    fn does_support_animation(&self, value: &mut bool) -> NativeStatus;

    /// Store whether the codec supports lossless coding in `value`.
    fn does_support_lossless(&self, value: &mut bool) -> NativeStatus;

    /// Store whether the codec supports multi-frame images in `value`.
    fn does_support_multiframe(&self, value: &mut bool) -> NativeStatus;
}
