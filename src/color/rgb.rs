//! RGB value type with structural equality and deterministic ordering
//!
//! Colors are plain 8-bit-per-channel RGB triplets. Equality and hashing
//! are byte-exact, so a `HashMap<Rgb, _>` deduplicates colors the way the
//! aggregation requires. The derived `Ord` compares `(r, g, b)` in field
//! order, which is identical to comparing the packed 24-bit value and
//! serves as the documented tie-break for equal aggregate distances.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed 24-bit value, red in the high byte
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Euclidean distance to another color in RGB space
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Lowercase 6-digit hex representation, e.g. `"ff0080"`
    pub fn hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
