use serde::{Deserialize, Serialize};

use crate::{Color, line_pattern::LinePattern, point::MarkerType};

/// Line styling options for interpolated series.
///
/// Determines how consecutive points in a series are connected. Every style
/// other than [`LineStyle::Solid`] is drawn through a repeating [`LinePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Solid continuous line. One pixel wide at thickness 1, a swept quad otherwise.
    #[default]
    Solid,
    /// Evenly spaced dashes.
    Dashed,
    /// Short dots.
    Dotted,
    /// Alternating dashes and dots.
    DotDash,
    /// Long dashes.
    LongDash,
    /// Alternating long and short dashes.
    TwoDash,
}

impl LineStyle {
    /// The on/off pattern for this style, or `None` for solid lines.
    pub fn pattern(self) -> Option<LinePattern> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(LinePattern::DASHED),
            Self::Dotted => Some(LinePattern::DOTTED),
            Self::DotDash => Some(LinePattern::DOT_DASH),
            Self::LongDash => Some(LinePattern::LONG_DASH),
            Self::TwoDash => Some(LinePattern::TWO_DASH),
        }
    }
}

/// Errors that can occur when constructing or validating a series.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The x and y coordinate sequences differ in length.
    #[error("xs has {xs} values but ys has {ys}")]
    LengthMismatch { xs: usize, ys: usize },
    /// Stroke thickness must be at least one pixel.
    #[error("stroke thickness must be at least 1")]
    ZeroThickness,
}

/// Default stroke thickness in pixels.
pub const DEFAULT_THICKNESS: u32 = 2;

/// An ordered sequence of data points plus how to draw them.
///
/// Order is significant: with interpolation on, each point is connected to
/// the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Series point positions in data space.
    pub positions: Vec<[f64; 2]>,

    /// Optional label, used in diagnostics.
    pub label: Option<String>,

    /// Color of the entire series.
    pub color: Color,

    /// Connect consecutive points with lines. When false, markers are drawn.
    pub interpolate: bool,

    /// Line style used when `interpolate` is set.
    pub line_style: LineStyle,

    /// Marker glyph used when `interpolate` is not set.
    pub marker: MarkerType,

    /// Stroke thickness in pixels (at least 1).
    pub thickness: u32,
}

impl Series {
    fn with_defaults(positions: Vec<[f64; 2]>) -> Self {
        Self {
            positions,
            label: None,
            color: Color::from_rgb(0.3, 0.3, 0.9),
            interpolate: true,
            line_style: LineStyle::Solid,
            marker: MarkerType::default(),
            thickness: DEFAULT_THICKNESS,
        }
    }

    /// Create a new interpolated (line) series.
    pub fn line(positions: Vec<[f64; 2]>, line_style: LineStyle) -> Self {
        Self {
            line_style,
            ..Self::with_defaults(positions)
        }
    }

    /// Create a new marker-only series.
    pub fn markers(positions: Vec<[f64; 2]>, marker: MarkerType) -> Self {
        Self {
            interpolate: false,
            marker,
            ..Self::with_defaults(positions)
        }
    }

    /// Build a line series from borrowed coordinate slices.
    pub fn from_xy(xs: &[f64], ys: &[f64], line_style: LineStyle) -> Result<Self, SeriesError> {
        if xs.len() != ys.len() {
            return Err(SeriesError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let positions = xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect();
        Ok(Self::line(positions, line_style))
    }

    /// Sample `function` uniformly over `[x_min, x_max]` at `num + 1` points.
    pub fn from_fn(
        function: impl Fn(f64) -> f64,
        num: u32,
        x_min: f64,
        x_max: f64,
        line_style: LineStyle,
    ) -> Self {
        Self::line(sample_fn(function, num, x_min, x_max), line_style)
    }

    /// Set a label for the series.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    /// Set the color of the entire series.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the stroke thickness in pixels. Values below 1 are raised to 1.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness.max(1);
        self
    }

    /// Set or change the line style, switching the series to interpolated drawing.
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self.interpolate = true;
        self
    }

    /// Set or change the marker, switching the series to marker drawing.
    pub fn marker(mut self, marker: MarkerType) -> Self {
        self.marker = marker;
        self.interpolate = false;
        self
    }

    /// X coordinates in order.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().map(|p| p[0])
    }

    /// Y coordinates in order.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.iter().map(|p| p[1])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), SeriesError> {
        if self.thickness == 0 {
            return Err(SeriesError::ZeroThickness);
        }
        Ok(())
    }
}

/// `num + 1` samples of `function` at `x_min + i * (x_max - x_min) / num`.
pub fn sample_fn(function: impl Fn(f64) -> f64, num: u32, x_min: f64, x_max: f64) -> Vec<[f64; 2]> {
    if num == 0 {
        return vec![[x_min, function(x_min)]];
    }
    let step = (x_max - x_min) / num as f64;
    (0..=num)
        .map(|i| {
            let x = x_min + step * i as f64;
            [x, function(x)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_rejects_mismatch() {
        let err = Series::from_xy(&[1.0, 2.0], &[1.0], LineStyle::Solid).unwrap_err();
        assert_eq!(err, SeriesError::LengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn from_xy_preserves_order() {
        let s = Series::from_xy(&[-2.0, -1.0, 0.0], &[2.0, -1.0, -2.0], LineStyle::Dotted).unwrap();
        assert_eq!(s.positions, vec![[-2.0, 2.0], [-1.0, -1.0], [0.0, -2.0]]);
        assert!(s.interpolate);
        assert_eq!(s.ys().collect::<Vec<_>>(), vec![2.0, -1.0, -2.0]);
    }

    #[test]
    fn sampling_covers_closed_interval() {
        let pts = sample_fn(|x| x * x, 4, -2.0, 2.0);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], [-2.0, 4.0]);
        assert_eq!(pts[2], [0.0, 0.0]);
        assert_eq!(pts[4], [2.0, 4.0]);
    }

    #[test]
    fn sampling_zero_steps_yields_start() {
        assert_eq!(sample_fn(|x| x + 1.0, 0, 3.0, 9.0), vec![[3.0, 4.0]]);
    }

    #[test]
    fn builders_switch_drawing_mode() {
        let s = Series::line(vec![[0.0, 0.0]], LineStyle::Solid).marker(MarkerType::Cross);
        assert!(!s.interpolate);
        let s = s.line_style(LineStyle::TwoDash).with_thickness(0);
        assert!(s.interpolate);
        assert_eq!(s.thickness, 1);
    }

    #[test]
    fn only_solid_has_no_pattern() {
        assert!(LineStyle::Solid.pattern().is_none());
        for style in [
            LineStyle::Dashed,
            LineStyle::Dotted,
            LineStyle::DotDash,
            LineStyle::LongDash,
            LineStyle::TwoDash,
        ] {
            assert!(style.pattern().is_some());
        }
    }

    #[test]
    fn styles_parse_from_tags() {
        #[derive(Deserialize)]
        struct Wrap {
            style: LineStyle,
            marker: MarkerType,
        }
        let w: Wrap = toml::from_str("style = \"dot_dash\"\nmarker = \"filled_triangle\"").unwrap();
        assert_eq!(w.style, LineStyle::DotDash);
        assert_eq!(w.marker, MarkerType::FilledTriangle);
        assert!(toml::from_str::<Wrap>("style = \"dashd\"\nmarker = \"cross\"").is_err());
    }
}
