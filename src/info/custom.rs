//! Override property sets for codec info without native backing

use crate::core::format::ContainerFormat;
use crate::core::version::CodecVersion;

/// Property overrides for a [`CodecInfo`](crate::CodecInfo) instance without
/// native backing.
///
/// The default supplies nothing: every getter on the resulting instance
/// fails with `NotImplemented` until its slot is filled. Use the builder
/// methods to supply exactly the properties the instance should expose.
///
/// # Example
///
/// ```rust
/// use codeckit::{CodecInfo, CodecVersion, CustomProperties};
///
/// let info = CodecInfo::custom(
///     CustomProperties::default()
///         .with_friendly_name("In-house RAW Decoder")
///         .with_version(CodecVersion::new(0, 9))
///         .with_supports_lossless(true),
/// );
///
/// assert_eq!(info.friendly_name()?, "In-house RAW Decoder");
/// # Ok::<(), codeckit::CodecInfoError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomProperties {
    /// Container format identifier
    pub container_format: Option<ContainerFormat>,
    /// Codec author
    pub author: Option<String>,
    /// Codec version
    pub version: Option<CodecVersion>,
    /// Format specification version
    pub specification_version: Option<CodecVersion>,
    /// Human-readable codec name
    pub friendly_name: Option<String>,
    /// Device manufacturer
    pub device_manufacturer: Option<String>,
    /// Comma-separated device model list
    pub device_models: Option<String>,
    /// Comma-separated MIME type list
    pub mime_types: Option<String>,
    /// Comma-separated file extension list
    pub file_extensions: Option<String>,
    /// Whether the codec supports animated images
    pub supports_animation: Option<bool>,
    /// Whether the codec supports lossless coding
    pub supports_lossless: Option<bool>,
    /// Whether the codec supports multi-frame images
    pub supports_multiple_frames: Option<bool>,
}

impl CustomProperties {
    /// Supply the container format identifier.
    pub fn with_container_format(mut self, format: ContainerFormat) -> Self {
        self.container_format = Some(format);
        self
    }

    /// Supply the author string.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Supply the codec version.
    pub fn with_version(mut self, version: CodecVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Supply the format specification version.
    pub fn with_specification_version(mut self, version: CodecVersion) -> Self {
        self.specification_version = Some(version);
        self
    }

    /// Supply the human-readable codec name.
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Supply the device manufacturer string.
    pub fn with_device_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.device_manufacturer = Some(manufacturer.into());
        self
    }

    /// Supply the comma-separated device model list.
    pub fn with_device_models(mut self, models: impl Into<String>) -> Self {
        self.device_models = Some(models.into());
        self
    }

    /// Supply the comma-separated MIME type list.
    pub fn with_mime_types(mut self, mime_types: impl Into<String>) -> Self {
        self.mime_types = Some(mime_types.into());
        self
    }

    /// Supply the comma-separated file extension list.
    pub fn with_file_extensions(mut self, extensions: impl Into<String>) -> Self {
        self.file_extensions = Some(extensions.into());
        self
    }

    /// Supply the animation capability flag.
    pub fn with_supports_animation(mut self, value: bool) -> Self {
        self.supports_animation = Some(value);
        self
    }

    /// Supply the lossless capability flag.
    pub fn with_supports_lossless(mut self, value: bool) -> Self {
        self.supports_lossless = Some(value);
        self
    }

    /// Supply the multi-frame capability flag.
    pub fn with_supports_multiple_frames(mut self, value: bool) -> Self {
        self.supports_multiple_frames = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_supplies_nothing() {
        let props = CustomProperties::default();
        assert!(props.author.is_none());
        assert!(props.supports_animation.is_none());
    }

    #[test]
    fn test_builder_fills_slots() {
        let props = CustomProperties::default()
            .with_author("Vendor")
            .with_container_format(ContainerFormat::GIF)
            .with_supports_animation(true);
        assert_eq!(props.author.as_deref(), Some("Vendor"));
        assert_eq!(props.container_format, Some(ContainerFormat::GIF));
        assert_eq!(props.supports_animation, Some(true));
        assert!(props.version.is_none());
    }
}
