//! Axis bounds: caller overrides, data extrema and degenerate-range repair.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::series::Series;

/// Bounds used when there is no data to scan.
pub const FALLBACK_MIN: f64 = -10.0;
/// Bounds used when there is no data to scan.
pub const FALLBACK_MAX: f64 = 10.0;
/// Replacement range for an axis whose span collapsed to zero.
pub const DEGENERATE_RANGE: (f64, f64) = (0.0, 10.0);

/// Caller supplied axis limits. Each bound is optional; a missing bound is
/// taken from the data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLimits {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl AxisLimits {
    /// Limits that fully override auto-detection.
    pub fn explicit(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min: Some(x_min),
            x_max: Some(x_max),
            y_min: Some(y_min),
            y_max: Some(y_max),
        }
    }

    /// Set both x bounds.
    pub fn with_x(mut self, min: f64, max: f64) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }

    /// Set both y bounds.
    pub fn with_y(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }

    /// True when all four bounds are supplied.
    pub fn is_explicit(&self) -> bool {
        self.x_min.is_some() && self.x_max.is_some() && self.y_min.is_some() && self.y_max.is_some()
    }

    /// True when no bound is supplied.
    pub fn is_auto(&self) -> bool {
        self.x_min.is_none() && self.x_max.is_none() && self.y_min.is_none() && self.y_max.is_none()
    }

    /// Check that supplied bounds are finite and no supplied pair is inverted.
    pub fn is_valid(&self) -> bool {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .into_iter()
            .flatten()
            .all(f64::is_finite);
        let ordered = |min: Option<f64>, max: Option<f64>| match (min, max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        };
        finite && ordered(self.x_min, self.x_max) && ordered(self.y_min, self.y_max)
    }
}

/// The data-space rectangle displayed by one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ClipRect {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Lower-left corner.
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x_min, self.y_min)
    }

    /// Upper-right corner.
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x_max, self.y_max)
    }

    /// Width and height in data units.
    pub fn span(&self) -> DVec2 {
        self.max() - self.min()
    }

    /// Finite with positive span on both axes.
    pub fn is_valid(&self) -> bool {
        self.min().is_finite() && self.max().is_finite() && self.span().cmpgt(DVec2::ZERO).all()
    }

    /// Inclusive containment, used by the segment clipper.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Strict containment, used for markers. Points on the boundary are outside.
    pub fn contains_strict(&self, p: DVec2) -> bool {
        p.x > self.x_min && p.x < self.x_max && p.y > self.y_min && p.y < self.y_max
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::new(FALLBACK_MIN, FALLBACK_MAX, FALLBACK_MIN, FALLBACK_MAX)
    }
}

/// Componentwise extrema over every finite point of every series.
pub fn data_extent(series: &[Series]) -> Option<(DVec2, DVec2)> {
    let mut data_min: Option<DVec2> = None;
    let mut data_max: Option<DVec2> = None;
    for s in series {
        let mut seen = false;
        for &pos in &s.positions {
            let p = DVec2::from(pos);
            if !p.is_finite() {
                continue;
            }
            seen = true;
            data_min = Some(data_min.map_or(p, |m| m.min(p)));
            data_max = Some(data_max.map_or(p, |m| m.max(p)));
        }
        if !seen && !s.positions.is_empty() {
            log::warn!(
                "series {:?} has no finite points and does not contribute to bounds",
                s.label.as_deref().unwrap_or("<unnamed>")
            );
        }
    }
    data_min.zip(data_max)
}

/// Compute the rectangle a render pass displays.
///
/// Supplied limits win; missing ones come from the data extrema, or from the
/// `[-10, 10]` fallback when there is nothing to scan. An axis with zero span
/// is replaced by `[0, 10]`.
pub fn compute_bounds(series: &[Series], limits: &AxisLimits) -> ClipRect {
    let (data_min, data_max) = if limits.is_explicit() {
        (DVec2::splat(FALLBACK_MIN), DVec2::splat(FALLBACK_MAX))
    } else {
        data_extent(series)
            .unwrap_or((DVec2::splat(FALLBACK_MIN), DVec2::splat(FALLBACK_MAX)))
    };

    let (x_min, x_max) = repair_axis(
        "x",
        limits.x_min.unwrap_or(data_min.x),
        limits.x_max.unwrap_or(data_max.x),
    );
    let (y_min, y_max) = repair_axis(
        "y",
        limits.y_min.unwrap_or(data_min.y),
        limits.y_max.unwrap_or(data_max.y),
    );
    ClipRect::new(x_min, x_max, y_min, y_max)
}

fn repair_axis(axis: &str, min: f64, max: f64) -> (f64, f64) {
    if max - min == 0.0 {
        log::warn!("degenerate {axis} range [{min}, {max}], using {DEGENERATE_RANGE:?}");
        DEGENERATE_RANGE
    } else if min > max {
        // A single supplied bound can land on the far side of the data.
        log::warn!("inverted {axis} range [{min}, {max}], swapping");
        (max, min)
    } else {
        (min, max)
    }
}
