//! Points and axis ranges picked by clicking on a rendered plot.

use glam::DVec2;

use crate::{
    AxisLimits,
    camera::Camera,
    point::MarkerType,
    series::Series,
};

/// A two-click range along one axis. The second click completes the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeMarker {
    first: Option<f64>,
    range: Option<(f64, f64)>,
}

impl RangeMarker {
    /// Record one click. Every second click yields an ordered `(min, max)`;
    /// a click after a completed range starts a new one.
    pub fn mark(&mut self, value: f64) {
        match self.first.take() {
            None => {
                self.first = Some(value);
                self.range = None;
            }
            Some(first) => self.range = Some((first.min(value), first.max(value))),
        }
    }

    /// The completed range, if both clicks have been made.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// True while waiting for the second click.
    pub fn is_pending(&self) -> bool {
        self.first.is_some()
    }
}

/// Data-space picks collected from device clicks (origin top-left).
#[derive(Debug, Clone, Default)]
pub struct PickBuffer {
    points: Vec<DVec2>,
    x: RangeMarker,
    y: RangeMarker,
}

impl PickBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a device click to data space and store it.
    pub fn push_device_point(&mut self, camera: &Camera, device: DVec2) -> DVec2 {
        let p = camera.device_to_data(device);
        self.points.push(p);
        p
    }

    /// Mark one end of an x range at a device position.
    pub fn mark_x(&mut self, camera: &Camera, device: DVec2) {
        self.x.mark(camera.device_to_data(device).x);
    }

    /// Mark one end of a y range at a device position.
    pub fn mark_y(&mut self, camera: &Camera, device: DVec2) {
        self.y.mark(camera.device_to_data(device).y);
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.x.range()
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y.range()
    }

    /// Forget all points and range marks.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The picked points as a marker series, in click order.
    pub fn to_series(&self, marker: MarkerType) -> Series {
        Series::markers(self.points.iter().map(|p| p.to_array()).collect(), marker)
    }

    /// Limits for re-plotting the marked ranges. Unmarked axes stay automatic.
    pub fn limits(&self) -> AxisLimits {
        let mut limits = AxisLimits::default();
        if let Some((min, max)) = self.x_range() {
            limits = limits.with_x(min, max);
        }
        if let Some((min, max)) = self.y_range() {
            limits = limits.with_y(min, max);
        }
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ClipRect;

    fn camera() -> Camera {
        Camera::new(ClipRect::new(0.0, 100.0, 0.0, 100.0), 100, 100, 0, 0)
    }

    #[test]
    fn device_clicks_become_data_points() {
        let mut picks = PickBuffer::new();
        let p = picks.push_device_point(&camera(), DVec2::new(25.0, 9.0));
        assert!((p - DVec2::new(25.0, 90.0)).length() < 1e-9);
        assert_eq!(picks.xs(), vec![p.x]);
        let s = picks.to_series(MarkerType::Cross);
        assert!(!s.interpolate);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn ranges_are_ordered() {
        let cam = camera();
        let mut picks = PickBuffer::new();
        picks.mark_x(&cam, DVec2::new(80.0, 0.0));
        assert_eq!(picks.x_range(), None);
        picks.mark_x(&cam, DVec2::new(20.0, 0.0));
        assert_eq!(picks.x_range(), Some((20.0, 80.0)));

        picks.mark_y(&cam, DVec2::new(0.0, 9.0));
        picks.mark_y(&cam, DVec2::new(0.0, 59.0));
        let (lo, hi) = picks.y_range().unwrap();
        assert!((lo - 40.0).abs() < 1e-9 && (hi - 90.0).abs() < 1e-9);

        let limits = picks.limits();
        assert!(limits.is_explicit());
        assert_eq!(limits.x_min, Some(20.0));
    }

    #[test]
    fn third_click_restarts_range() {
        let mut m = RangeMarker::default();
        m.mark(3.0);
        m.mark(1.0);
        m.mark(7.0);
        assert!(m.is_pending());
        assert_eq!(m.range(), None);
        m.mark(5.0);
        assert_eq!(m.range(), Some((5.0, 7.0)));
    }

    #[test]
    fn clear_resets_everything() {
        let cam = camera();
        let mut picks = PickBuffer::new();
        picks.push_device_point(&cam, DVec2::new(1.0, 1.0));
        picks.mark_x(&cam, DVec2::new(1.0, 1.0));
        picks.clear();
        assert!(picks.points().is_empty());
        assert!(picks.limits().is_auto());
    }
}
