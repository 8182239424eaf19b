//! Plot configuration: output geometry, axis limits, labels and series.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    AxisLimits, Color, PlotError,
    axes::AxesConfig,
    bounds::{ClipRect, compute_bounds},
    camera::Camera,
    series::Series,
};

/// Everything one render pass needs.
///
/// The scalar settings can be loaded from TOML; series are attached in code.
///
/// ```toml
/// width = 800
/// height = 600
/// title = "sin"
///
/// [limits]
/// x_min = -6.28
/// x_max = 6.28
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Horizontal padding around the plot area, in pixels.
    pub padding_x: u32,
    /// Vertical padding around the plot area, in pixels.
    pub padding_y: u32,
    /// Axis range overrides. Missing bounds are computed from the series.
    pub limits: AxisLimits,
    /// Drawn centred above the plot area when axes are visible.
    pub title: String,
    /// Drawn below the plot area when axes are visible.
    pub x_label: String,
    /// Drawn rotated, left of the plot area, when axes are visible.
    pub y_label: String,
    pub background: Color,
    pub axes: AxesConfig,
    #[serde(skip)]
    pub series: Vec<Series>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            padding_x: 32,
            padding_y: 24,
            limits: AxisLimits::default(),
            title: String::new(),
            x_label: "X axis".to_string(),
            y_label: "Y axis".to_string(),
            background: Color::WHITE,
            axes: AxesConfig::default(),
            series: Vec::new(),
        }
    }
}

impl PlotConfig {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, PlotError> {
        Ok(toml::from_str(s)?)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Replace the series list.
    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }

    /// Append one series.
    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Check geometry, limits and every series.
    pub fn validate(&self) -> Result<(), PlotError> {
        if self.width == 0
            || self.height == 0
            || self.width <= self.padding_x.saturating_mul(2)
            || self.height <= self.padding_y.saturating_mul(2)
        {
            return Err(PlotError::InvalidGeometry {
                width: self.width,
                height: self.height,
                padding_x: self.padding_x,
                padding_y: self.padding_y,
            });
        }
        if !self.limits.is_valid() {
            return Err(PlotError::InvalidAxisLimits);
        }
        for s in &self.series {
            s.validate()?;
        }
        Ok(())
    }

    /// The data rectangle this configuration displays.
    pub fn bounds(&self) -> ClipRect {
        compute_bounds(&self.series, &self.limits)
    }

    /// The mapping from data space to this configuration's image.
    pub fn camera(&self) -> Camera {
        Camera::new(
            self.bounds(),
            self.width,
            self.height,
            self.padding_x,
            self.padding_y,
        )
    }
}
