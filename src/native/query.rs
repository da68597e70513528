//! Shared query routines over a native codec component
//!
//! Fixed-size properties (the container format identifier and the capability
//! flags) are read with a single call into a caller-provided slot.
//! Variable-length strings go through the component's two-phase contract:
//! probe for the required length with an empty buffer, then fill an
//! allocation of exactly that size. All nine string properties share one
//! routine and differ only in which component accessor they dispatch to.

use log::{debug, trace};

use crate::core::error::CodecResult;
use crate::core::format::ContainerFormat;
use crate::native::component::NativeCodecInfo;
use crate::native::status::NativeStatus;

/// Selector for the variable-length string properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringField {
    Author,
    Version,
    SpecificationVersion,
    FriendlyName,
    DeviceManufacturer,
    DeviceModels,
    MimeTypes,
    FileExtensions,
}

/// Selector for the boolean capability properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CapabilityFlag {
    Animation,
    Lossless,
    Multiframe,
}

fn query_field(
    component: &dyn NativeCodecInfo,
    field: StringField,
    buffer: &mut [u16],
    actual: &mut u32,
) -> NativeStatus {
    match field {
        StringField::Author => component.get_author(buffer, actual),
        StringField::Version => component.get_version(buffer, actual),
        StringField::SpecificationVersion => component.get_spec_version(buffer, actual),
        StringField::FriendlyName => component.get_friendly_name(buffer, actual),
        StringField::DeviceManufacturer => component.get_device_manufacturer(buffer, actual),
        StringField::DeviceModels => component.get_device_models(buffer, actual),
        StringField::MimeTypes => component.get_mime_types(buffer, actual),
        StringField::FileExtensions => component.get_file_extensions(buffer, actual),
    }
}

/// Read one variable-length string property with the two-phase protocol.
pub(crate) fn read_string(
    component: &dyn NativeCodecInfo,
    field: StringField,
) -> CodecResult<String> {
    let mut required: u32 = 0;
    let status = query_field(component, field, &mut [], &mut required);
    if !status.is_success() {
        debug!("{:?}: length probe failed with status {}", field, status);
    }
    status.ok()?;

    if required == 0 {
        return Ok(String::new());
    }
    trace!("{:?}: component reports {} UTF-16 units", field, required);

    let mut buffer = vec![0u16; required as usize];
    let mut written: u32 = 0;
    let status = query_field(component, field, &mut buffer, &mut written);
    if !status.is_success() {
        debug!("{:?}: fill call failed with status {}", field, status);
    }
    status.ok()?;

    // The probed length was only an allocation size; the fill call's written
    // length governs the result.
    let written = (written as usize).min(buffer.len());
    let mut units = &buffer[..written];
    if let Some(stripped) = units.strip_suffix(&[0]) {
        units = stripped;
    }
    Ok(String::from_utf16_lossy(units))
}

/// Read the container format identifier with a single call.
pub(crate) fn read_container_format(
    component: &dyn NativeCodecInfo,
) -> CodecResult<ContainerFormat> {
    let mut format = ContainerFormat::default();
    component.get_container_format(&mut format).ok()?;
    Ok(format)
}

/// Read one boolean capability flag with a single call.
pub(crate) fn read_flag(component: &dyn NativeCodecInfo, flag: CapabilityFlag) -> CodecResult<bool> {
    let mut value = false;
    match flag {
        CapabilityFlag::Animation => component.does_support_animation(&mut value),
        CapabilityFlag::Lossless => component.does_support_lossless(&mut value),
        CapabilityFlag::Multiframe => component.does_support_multiframe(&mut value),
    }
    .ok()?;
    Ok(value)
}
