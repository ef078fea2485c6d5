use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

/// A 24-bit RGB color, stored as the packed integer Discord expects.
///
/// The packed value is the single source of truth; the component triple and
/// hex forms are derived from it on access, so packing and unpacking always
/// round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let r = r as u32;
        let g = g as u32;
        let b = b as u32;
        Self((r << 16) | (g << 8) | b)
    }

    #[must_use]
    pub const fn from_int(int: u32) -> Self {
        Self(int)
    }

    /// Parses a hex literal like `"ff0000"` or `"#ff0000"`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let int = u32::from_str_radix(digits, 16)
            .with_context(|| format!("Invalid hex color {hex:?}"))?;
        Ok(Self(int))
    }

    #[must_use]
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// Decomposes into `[red, green, blue]`.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}
