use crate::{
    AxisLimits, Color, PlotError,
    axes::AxesConfig,
    config::PlotConfig,
    series::Series,
};

/// Builder for configuring and validating a [`PlotConfig`].
///
/// Provides a fluent API for setting up a plot before rendering it. All
/// settings have sensible defaults.
///
/// # Example
///
/// ```
/// use bitmap_plot::{LineStyle, PlotBuilder, Series};
///
/// let config = PlotBuilder::new()
///     .with_size(800, 600)
///     .with_x_lim(-6.28, 6.28)
///     .with_y_lim(-1.0, 1.0)
///     .add_series(Series::from_fn(f64::sin, 64, -6.28, 6.28, LineStyle::Solid))
///     .build()
///     .unwrap();
/// assert_eq!(config.width, 800);
/// ```
#[derive(Default)]
pub struct PlotBuilder {
    size: Option<(u32, u32)>,
    padding: Option<(u32, u32)>,
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    background: Option<Color>,
    axes: Option<AxesConfig>,
    series: Vec<Series>,
}

impl PlotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output image size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Set the horizontal and vertical padding in pixels.
    pub fn with_padding(mut self, x: u32, y: u32) -> Self {
        self.padding = Some((x, y));
        self
    }

    /// Set the x-axis limits (min, max). Overrides auto bounds for x.
    pub fn with_x_lim(mut self, min: f64, max: f64) -> Self {
        self.x_lim = Some((min, max));
        self
    }

    /// Set the y-axis limits (min, max). Overrides auto bounds for y.
    pub fn with_y_lim(mut self, min: f64, max: f64) -> Self {
        self.y_lim = Some((min, max));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis label for the plot.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.x_label = Some(l);
        }
        self
    }

    /// Set the y-axis label for the plot.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.y_label = Some(l);
        }
        self
    }

    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Draw axis lines, ticks and optionally a grid.
    pub fn with_axes(mut self, axes: AxesConfig) -> Self {
        self.axes = Some(axes);
        self
    }

    pub fn add_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Build the configuration, validating geometry, limits and series.
    pub fn build(self) -> Result<PlotConfig, PlotError> {
        let mut c = PlotConfig::default();

        if let Some((w, h)) = self.size {
            c.width = w;
            c.height = h;
        }
        if let Some((x, y)) = self.padding {
            c.padding_x = x;
            c.padding_y = y;
        }
        let mut limits = AxisLimits::default();
        if let Some((min, max)) = self.x_lim {
            limits = limits.with_x(min, max);
        }
        if let Some((min, max)) = self.y_lim {
            limits = limits.with_y(min, max);
        }
        c.limits = limits;
        if let Some(t) = self.title {
            c.title = t;
        }
        if let Some(x) = self.x_label {
            c.x_label = x;
        }
        if let Some(y) = self.y_label {
            c.y_label = y;
        }
        if let Some(bg) = self.background {
            c.background = bg;
        }
        if let Some(axes) = self.axes {
            c.axes = axes;
        }
        c.series = self.series;

        c.validate()?;
        Ok(c)
    }
}
