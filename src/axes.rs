//! Optional axis lines, tick marks and grid lines.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::{
    Color,
    bounds::ClipRect,
    camera::Camera,
    canvas::{Canvas, Rgba},
    clip::clip_segment,
    raster::draw_line_1px,
    ticks::{TARGET_STEPS, TickWeight, ticks},
};

/// Where the horizontal axis line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XAxisPlacement {
    /// Through `y = 0` when zero is strictly inside the y range, else at the bottom.
    #[default]
    Auto,
    Top,
    Bottom,
}

/// Where the vertical axis line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxisPlacement {
    /// Through `x = 0` when zero is strictly inside the x range, else at the left.
    #[default]
    Auto,
    Left,
    Right,
}

impl XAxisPlacement {
    /// The y value the horizontal axis passes through.
    pub fn origin(self, rect: &ClipRect) -> f64 {
        match self {
            Self::Auto => auto_origin(rect.y_min, rect.y_max),
            Self::Top => rect.y_max,
            Self::Bottom => rect.y_min,
        }
    }
}

impl YAxisPlacement {
    /// The x value the vertical axis passes through.
    pub fn origin(self, rect: &ClipRect) -> f64 {
        match self {
            Self::Auto => auto_origin(rect.x_min, rect.x_max),
            Self::Left => rect.x_min,
            Self::Right => rect.x_max,
        }
    }
}

fn auto_origin(min: f64, max: f64) -> f64 {
    if min < 0.0 && max > 0.0 { 0.0 } else { min }
}

/// Axis decoration settings. Hidden by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub visible: bool,
    pub x_axis: XAxisPlacement,
    pub y_axis: YAxisPlacement,
    /// Draw tick marks across the axis lines.
    pub ticks: bool,
    /// Draw grid lines at major and minor ticks.
    pub grid: bool,
    pub color: Color,
    pub grid_color: Color,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            visible: false,
            x_axis: XAxisPlacement::Auto,
            y_axis: YAxisPlacement::Auto,
            ticks: true,
            grid: false,
            color: Color::BLACK,
            grid_color: Color::from_rgb(0.85, 0.85, 0.85),
        }
    }
}

impl AxesConfig {
    /// Visible axes with ticks and default placement.
    pub fn shown() -> Self {
        Self {
            visible: true,
            ..Default::default()
        }
    }
}

/// Draw grid, axis lines and tick marks, in that order.
pub fn draw_axes(canvas: &mut Canvas, camera: &Camera, axes: &AxesConfig) {
    if !axes.visible {
        return;
    }
    let rect = camera.rect;
    let x_ticks = ticks(rect.x_min, rect.x_max, TARGET_STEPS);
    let y_ticks = ticks(rect.y_min, rect.y_max, TARGET_STEPS);

    if axes.grid {
        let grid = axes.grid_color.to_rgba8();
        let gridded = |w: TickWeight| matches!(w, TickWeight::Major | TickWeight::Minor);
        for t in x_ticks.iter().filter(|t| gridded(t.weight)) {
            let a = DVec2::new(t.value, rect.y_min);
            let b = DVec2::new(t.value, rect.y_max);
            draw_data_line(canvas, camera, a, b, grid);
        }
        for t in y_ticks.iter().filter(|t| gridded(t.weight)) {
            let a = DVec2::new(rect.x_min, t.value);
            let b = DVec2::new(rect.x_max, t.value);
            draw_data_line(canvas, camera, a, b, grid);
        }
    }

    let ink = axes.color.to_rgba8();
    let y0 = axes.x_axis.origin(&rect);
    let x0 = axes.y_axis.origin(&rect);
    draw_data_line(
        canvas,
        camera,
        DVec2::new(rect.x_min, y0),
        DVec2::new(rect.x_max, y0),
        ink,
    );
    draw_data_line(
        canvas,
        camera,
        DVec2::new(x0, rect.y_min),
        DVec2::new(x0, rect.y_max),
        ink,
    );

    if axes.ticks {
        for t in &x_ticks {
            let p = camera.data_to_pixel_floor(DVec2::new(t.value, y0));
            let h = t.weight.mark_half_length();
            draw_line_1px(canvas, p - IVec2::new(0, h), p + IVec2::new(0, h), ink);
        }
        for t in &y_ticks {
            let p = camera.data_to_pixel_floor(DVec2::new(x0, t.value));
            let h = t.weight.mark_half_length();
            draw_line_1px(canvas, p - IVec2::new(h, 0), p + IVec2::new(h, 0), ink);
        }
    }
}

fn draw_data_line(canvas: &mut Canvas, camera: &Camera, a: DVec2, b: DVec2, color: Rgba) {
    if let Some((a, b)) = clip_segment(a, b, &camera.rect) {
        draw_line_1px(
            canvas,
            camera.data_to_pixel_floor(a),
            camera.data_to_pixel_floor(b),
            color,
        );
    }
}
