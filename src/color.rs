use serde::{Deserialize, Serialize};

use crate::canvas::Rgba;

/// An RGBA color with floating point channels.
///
/// All components are expected to be in the 0.0..=1.0 range; out of range
/// values are clamped when the color is written to a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);

    /// Create an opaque color from three channels.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from four channels.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgba8(self) -> Rgba {
        Rgba::new(
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Self::from_rgb(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
    }
}

fn channel_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_and_clamps() {
        assert_eq!(Color::BLUE.to_rgba8(), Rgba::new(0, 0, 255, 255));
        let c = Color::from_rgba(2.0, -1.0, 0.5, f32::NAN);
        assert_eq!(c.to_rgba8(), Rgba::new(255, 0, 128, 0));
    }

    #[test]
    fn alpha_defaults_to_opaque_when_deserialized() {
        let c: Color = toml::from_str("r = 0.0\ng = 1.0\nb = 0.0").unwrap();
        assert_eq!(c, Color::GREEN);
    }
}
