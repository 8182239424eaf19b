use serde::{Deserialize, Serialize};

/// A point in data, normalized, pixel or display space.
///
/// The space is implied by where the value comes from; see [`camera`](crate::camera).
pub type Point = glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Marker glyphs for non-interpolated series.
///
/// Determines the shape stamped at each visible data point.
pub enum MarkerType {
    /// A plus shape spanning two pixels in each direction.
    Cross,
    /// A circle outline of radius 3.
    Circle,
    /// A filled circle of radius 3.
    #[default]
    FilledCircle,
    /// A triangle outline.
    Triangle,
    /// A filled triangle.
    FilledTriangle,
    /// A single pixel.
    Pixel,
}

impl MarkerType {
    /// Half-width of the glyph in pixels.
    pub fn radius(self) -> i32 {
        match self {
            Self::Cross => 2,
            Self::Circle | Self::FilledCircle | Self::Triangle | Self::FilledTriangle => 3,
            Self::Pixel => 0,
        }
    }
}
