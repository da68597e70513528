//! Container format identifiers
//!
//! Native codec components identify the container format they handle with a
//! 16-byte GUID. The identifier is stored in the component ABI's field
//! layout so a native query can fill it in place.

use std::fmt;

/// GUID identifying an image container format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerFormat {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl ContainerFormat {
    /// Windows bitmap container
    pub const BMP: ContainerFormat = ContainerFormat::new(
        0x0af1d87e,
        0xfcfe,
        0x4188,
        [0xbd, 0xeb, 0xa7, 0x90, 0x64, 0x71, 0xcb, 0xe3],
    );
    /// Graphics Interchange Format container
    pub const GIF: ContainerFormat = ContainerFormat::new(
        0x1f8a5601,
        0x7d4d,
        0x4cbd,
        [0x9c, 0x82, 0x1b, 0xc8, 0xd4, 0xee, 0xb9, 0xa5],
    );
    /// Windows icon container
    pub const ICO: ContainerFormat = ContainerFormat::new(
        0xa3a860c4,
        0x338f,
        0x4c17,
        [0x91, 0x9a, 0xfb, 0xa4, 0xb5, 0x62, 0x8f, 0x21],
    );
    /// JPEG (JFIF) container
    pub const JPEG: ContainerFormat = ContainerFormat::new(
        0x19e4a5aa,
        0x5662,
        0x4fc5,
        [0xa0, 0xc0, 0x17, 0x58, 0x02, 0x8e, 0x10, 0x57],
    );
    /// Portable Network Graphics container
    pub const PNG: ContainerFormat = ContainerFormat::new(
        0x1b7cfaf4,
        0x713f,
        0x473c,
        [0xbb, 0xcd, 0x61, 0x37, 0x42, 0x5f, 0xae, 0xaf],
    );
    /// Tagged Image File Format container
    pub const TIFF: ContainerFormat = ContainerFormat::new(
        0x163bcc30,
        0xe2e9,
        0x4f0b,
        [0x96, 0x1d, 0xa3, 0xe9, 0xfd, 0xb7, 0x88, 0xa3],
    );
    /// Windows Media Photo (HD Photo) container
    pub const WMP: ContainerFormat = ContainerFormat::new(
        0x57a37caa,
        0x367a,
        0x4540,
        [0x91, 0x6b, 0xf1, 0x83, 0xc5, 0x09, 0x3a, 0x4b],
    );

    /// Create an identifier from its GUID fields.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        ContainerFormat {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Short name of a well-known container format.
    ///
    /// Returns `None` for identifiers outside the well-known set.
    pub fn name(self) -> Option<&'static str> {
        const WELL_KNOWN: &[(ContainerFormat, &str)] = &[
            (ContainerFormat::BMP, "BMP"),
            (ContainerFormat::GIF, "GIF"),
            (ContainerFormat::ICO, "ICO"),
            (ContainerFormat::JPEG, "JPEG"),
            (ContainerFormat::PNG, "PNG"),
            (ContainerFormat::TIFF, "TIFF"),
            (ContainerFormat::WMP, "WMP"),
        ];
        WELL_KNOWN
            .iter()
            .find(|(format, _)| *format == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ContainerFormat {
    /// Render in the conventional `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}
