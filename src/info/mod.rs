//! Codec metadata API
//!
//! This module provides the high-level object for reading the descriptive
//! metadata of one encoder or decoder component.

pub mod access;
pub mod custom;

pub use access::{AccessPolicy, AllowAll};
pub use custom::CustomProperties;

use crate::core::error::{CodecInfoError, CodecResult};
use crate::core::format::ContainerFormat;
use crate::core::version::CodecVersion;
use crate::native::component::NativeCodecInfo;
use crate::native::query::{self, CapabilityFlag, StringField};

/// Read-only metadata for one encoder or decoder component.
///
/// An instance is either *native-backed*, exclusively owning a live
/// [`NativeCodecInfo`] handle and marshalling every property out of it, or
/// *custom*, serving the [`CustomProperties`] overrides it was built with
/// and failing everything else with
/// [`NotImplemented`](CodecInfoError::NotImplemented). The backing is chosen
/// at construction and never changes; there is no setter surface.
///
/// Every getter first consults the instance's [`AccessPolicy`], then reads
/// through the backing. Getters never mutate state, so shared references may
/// be used from multiple threads as long as the native component tolerates
/// concurrent read-only queries.
///
/// # Example
///
/// ```rust
/// use codeckit::{CodecInfo, CustomProperties};
///
/// let info = CodecInfo::custom(
///     CustomProperties::default().with_mime_types("image/tiff,image/tif"),
/// );
///
/// assert_eq!(info.mime_type_list()?, vec!["image/tiff", "image/tif"]);
/// # Ok::<(), codeckit::CodecInfoError>(())
/// ```
pub struct CodecInfo {
    backing: Backing,
    access: Box<dyn AccessPolicy>,
}

/// How a [`CodecInfo`] answers property reads.
enum Backing {
    /// Live native component. The box owns the handle; dropping the
    /// `CodecInfo` drops the box and releases the native resource.
    Native(Box<dyn NativeCodecInfo>),
    /// No native backing; values come from the supplied overrides.
    Custom(CustomProperties),
}

fn not_implemented(property: &str) -> CodecInfoError {
    CodecInfoError::NotImplemented(property.to_string())
}

/// Split a comma-separated component list into its entries.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl CodecInfo {
    /// Wrap a live native component, granting every caller.
    pub fn from_native(component: Box<dyn NativeCodecInfo>) -> Self {
        Self::from_native_with_policy(component, Box::new(AllowAll))
    }

    /// Wrap a live native component behind an access policy.
    pub fn from_native_with_policy(
        component: Box<dyn NativeCodecInfo>,
        access: Box<dyn AccessPolicy>,
    ) -> Self {
        CodecInfo {
            backing: Backing::Native(component),
            access,
        }
    }

    /// Build an instance without native backing, granting every caller.
    ///
    /// Getters serve the supplied overrides; anything not supplied fails
    /// with [`NotImplemented`](CodecInfoError::NotImplemented).
    pub fn custom(properties: CustomProperties) -> Self {
        Self::custom_with_policy(properties, Box::new(AllowAll))
    }

    /// Build an instance without native backing behind an access policy.
    pub fn custom_with_policy(
        properties: CustomProperties,
        access: Box<dyn AccessPolicy>,
    ) -> Self {
        CodecInfo {
            backing: Backing::Custom(properties),
            access,
        }
    }

    /// Whether this instance is backed by a live native component.
    pub fn is_native(&self) -> bool {
        matches!(self.backing, Backing::Native(_))
    }

    /// Container format identifier of the codec.
    pub fn container_format(&self) -> CodecResult<ContainerFormat> {
        self.access.check_metadata_read()?;
        match &self.backing {
            Backing::Native(component) => query::read_container_format(component.as_ref()),
            Backing::Custom(properties) => properties
                .container_format
                .ok_or_else(|| not_implemented("container_format")),
        }
    }

    /// Author of the codec.
    pub fn author(&self) -> CodecResult<String> {
        self.string_property(StringField::Author, |p| p.author.clone(), "author")
    }

    /// Version of the codec.
    ///
    /// A component that reports an empty version string yields
    /// [`CodecVersion::ZERO`].
    pub fn version(&self) -> CodecResult<CodecVersion> {
        self.version_property(StringField::Version, |p| p.version, "version")
    }

    /// Version of the container format specification the codec implements.
    ///
    /// A component that reports an empty version string yields
    /// [`CodecVersion::ZERO`].
    pub fn specification_version(&self) -> CodecResult<CodecVersion> {
        self.version_property(
            StringField::SpecificationVersion,
            |p| p.specification_version,
            "specification_version",
        )
    }

    /// Human-readable name of the codec.
    pub fn friendly_name(&self) -> CodecResult<String> {
        self.string_property(
            StringField::FriendlyName,
            |p| p.friendly_name.clone(),
            "friendly_name",
        )
    }

    /// Manufacturer of the device the codec targets, if any.
    pub fn device_manufacturer(&self) -> CodecResult<String> {
        self.string_property(
            StringField::DeviceManufacturer,
            |p| p.device_manufacturer.clone(),
            "device_manufacturer",
        )
    }

    /// Comma-separated list of device models the codec targets.
    pub fn device_models(&self) -> CodecResult<String> {
        self.string_property(
            StringField::DeviceModels,
            |p| p.device_models.clone(),
            "device_models",
        )
    }

    /// Comma-separated list of MIME types associated with the format.
    pub fn mime_types(&self) -> CodecResult<String> {
        self.string_property(StringField::MimeTypes, |p| p.mime_types.clone(), "mime_types")
    }

    /// Comma-separated list of file extensions associated with the format.
    pub fn file_extensions(&self) -> CodecResult<String> {
        self.string_property(
            StringField::FileExtensions,
            |p| p.file_extensions.clone(),
            "file_extensions",
        )
    }

    /// MIME types as individual entries.
    pub fn mime_type_list(&self) -> CodecResult<Vec<String>> {
        Ok(split_list(&self.mime_types()?))
    }

    /// File extensions as individual entries.
    pub fn file_extension_list(&self) -> CodecResult<Vec<String>> {
        Ok(split_list(&self.file_extensions()?))
    }

    /// Whether the codec supports animated images.
    pub fn supports_animation(&self) -> CodecResult<bool> {
        self.flag_property(
            CapabilityFlag::Animation,
            |p| p.supports_animation,
            "supports_animation",
        )
    }

    /// Whether the codec supports lossless coding.
    pub fn supports_lossless(&self) -> CodecResult<bool> {
        self.flag_property(
            CapabilityFlag::Lossless,
            |p| p.supports_lossless,
            "supports_lossless",
        )
    }

    /// Whether the codec supports images with multiple frames.
    pub fn supports_multiple_frames(&self) -> CodecResult<bool> {
        self.flag_property(
            CapabilityFlag::Multiframe,
            |p| p.supports_multiple_frames,
            "supports_multiple_frames",
        )
    }

    /// Guarded read of one string property.
    fn string_property(
        &self,
        field: StringField,
        override_slot: impl FnOnce(&CustomProperties) -> Option<String>,
        name: &str,
    ) -> CodecResult<String> {
        self.access.check_metadata_read()?;
        match &self.backing {
            Backing::Native(component) => query::read_string(component.as_ref(), field),
            Backing::Custom(properties) => {
                override_slot(properties).ok_or_else(|| not_implemented(name))
            }
        }
    }

    /// Guarded read of one version-typed property.
    fn version_property(
        &self,
        field: StringField,
        override_slot: impl FnOnce(&CustomProperties) -> Option<CodecVersion>,
        name: &str,
    ) -> CodecResult<CodecVersion> {
        self.access.check_metadata_read()?;
        match &self.backing {
            Backing::Native(component) => {
                let raw = query::read_string(component.as_ref(), field)?;
                if raw.is_empty() {
                    Ok(CodecVersion::ZERO)
                } else {
                    raw.parse()
                }
            }
            Backing::Custom(properties) => {
                override_slot(properties).ok_or_else(|| not_implemented(name))
            }
        }
    }

    /// Guarded read of one capability flag.
    fn flag_property(
        &self,
        flag: CapabilityFlag,
        override_slot: impl FnOnce(&CustomProperties) -> Option<bool>,
        name: &str,
    ) -> CodecResult<bool> {
        self.access.check_metadata_read()?;
        match &self.backing {
            Backing::Native(component) => query::read_flag(component.as_ref(), flag),
            Backing::Custom(properties) => {
                override_slot(properties).ok_or_else(|| not_implemented(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_is_not_native() {
        let info = CodecInfo::custom(CustomProperties::default());
        assert!(!info.is_native());
    }

    #[test]
    fn test_custom_default_fails_not_implemented() {
        let info = CodecInfo::custom(CustomProperties::default());
        assert!(matches!(
            info.author(),
            Err(CodecInfoError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_custom_override_served() {
        let info = CodecInfo::custom(CustomProperties::default().with_author("Vendor"));
        assert_eq!(info.author().unwrap(), "Vendor");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("image/png, image/x-png"),
            vec!["image/png", "image/x-png"]
        );
        assert!(split_list("").is_empty());
    }
}
