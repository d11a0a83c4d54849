//! Paint colors.

use std::fmt;

use palette::{LinSrgb, Srgb};

use crate::error::{Result, ShowroomError};

/// An sRGB paint color as picked from a swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintColor(Srgb<u8>);

impl PaintColor {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex.trim()
            .parse::<Srgb<u8>>()
            .map(Self)
            .map_err(|_| ShowroomError::InvalidColor(hex.to_string()))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }

    /// Linear RGBA for shading, alpha is always 1.
    pub fn linear_rgba(&self) -> [f32; 4] {
        let lin: LinSrgb<f32> = self.0.into_format::<f32>().into_linear();
        [lin.red, lin.green, lin.blue, 1.0]
    }

    pub fn srgb(&self) -> Srgb<u8> {
        self.0
    }
}

impl fmt::Display for PaintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        let red = PaintColor::from_hex("#ff0000").unwrap();
        assert_eq!(red, PaintColor::from_rgb(255, 0, 0));
        assert_eq!(red.to_hex(), "#ff0000");
        assert_eq!(PaintColor::from_hex("0066cc").unwrap().to_hex(), "#0066cc");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            PaintColor::from_hex("#zzzzzz"),
            Err(ShowroomError::InvalidColor("#zzzzzz".to_string()))
        );
    }

    #[test]
    fn linear_conversion() {
        let white = PaintColor::from_rgb(255, 255, 255).linear_rgba();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let grey = PaintColor::from_hex("#333333").unwrap().linear_rgba();
        // sRGB 0.2 is roughly 0.033 linear
        assert!(grey[0] > 0.03 && grey[0] < 0.04, "got {}", grey[0]);
    }
}
