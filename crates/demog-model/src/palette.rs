//! Chart colours.

use serde::{Serialize, Serializer};

use crate::axis::Gender;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Lowercase `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Bar colours for the secondary axis, indexed by [`Gender::index`].
pub const GENDER_PALETTE: [Rgb; 3] = [
    Rgb(0xc9, 0xd9, 0xd3),
    Rgb(0x71, 0x8d, 0xbf),
    Rgb(0xe8, 0x4d, 0x60),
];

/// Colours for the sample placeholder chart (one per sample year).
pub const SAMPLE_PALETTE: [Rgb; 4] = [
    Rgb(0xc9, 0xd9, 0xd3),
    Rgb(0x71, 0x8d, 0xbf),
    Rgb(0xe8, 0x4d, 0x60),
    Rgb(0x00, 0x80, 0x00),
];

impl Gender {
    /// Bar colour for this member.
    pub const fn color(self) -> Rgb {
        GENDER_PALETTE[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Gender::Male.color().hex(), "#c9d9d3");
        assert_eq!(Gender::Female.color().hex(), "#718dbf");
        assert_eq!(Gender::NonBinary.color().hex(), "#e84d60");
        assert_eq!(SAMPLE_PALETTE[3].hex(), "#008000");
    }

    #[test]
    fn test_serialize_as_hex() {
        let json = serde_json::to_string(&GENDER_PALETTE).unwrap();
        assert_eq!(json, r##"["#c9d9d3","#718dbf","#e84d60"]"##);
    }
}
