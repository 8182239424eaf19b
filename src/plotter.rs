//! The caller-facing plotting API: sample, render and encode in one call.

use std::path::Path;

use crate::{
    Color, PlotError,
    canvas::Canvas,
    config::PlotConfig,
    encoder::{Encoder, PngEncoder},
    plot_session::{ContinuousSession, render},
    series::{DEFAULT_THICKNESS, LineStyle, Series},
};

/// Holds the current plot configuration and series style, and at most one
/// open continuous plot.
///
/// Every call plots exactly the series it is given; the configuration only
/// supplies geometry, limits, background and axes.
///
/// ```no_run
/// use bitmap_plot::{Color, LineStyle, PlotConfig, Plotter};
///
/// let mut plotter = Plotter::new(PlotConfig::default());
/// plotter.set_color(Color::BLUE);
/// plotter.plot_fn("sin.png", f64::sin, 64, -6.28, 6.28)?;
///
/// plotter.set_line_style(LineStyle::Dotted);
/// plotter.plot_fn_continuous("layers.png", f64::sin, 64, -6.28, 6.28)?;
/// plotter.set_color(Color::RED);
/// plotter.plot_fn_continuous("layers.png", f64::cos, 64, -6.28, 6.28)?;
/// plotter.finish_continuous()?;
/// # Ok::<(), bitmap_plot::PlotError>(())
/// ```
pub struct Plotter<E: Encoder = PngEncoder> {
    config: PlotConfig,
    color: Color,
    line_style: LineStyle,
    thickness: u32,
    encoder: E,
    continuous: Option<ContinuousSession>,
}

impl Plotter<PngEncoder> {
    /// A plotter writing PNG files.
    pub fn new(config: PlotConfig) -> Self {
        Self::with_encoder(config, PngEncoder)
    }
}

impl<E: Encoder> Plotter<E> {
    pub fn with_encoder(config: PlotConfig, encoder: E) -> Self {
        Self {
            config,
            color: Color::BLUE,
            line_style: LineStyle::Solid,
            thickness: DEFAULT_THICKNESS,
            encoder,
            continuous: None,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Mutable access to the configuration used by subsequent calls.
    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    /// Set the stroke thickness. Values below 1 are raised to 1.
    pub fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.max(1);
    }

    fn styled(&self, series: Series) -> Series {
        series
            .line_style(self.line_style)
            .with_color(self.color)
            .with_thickness(self.thickness)
    }

    fn layer(&self, series: Option<Series>) -> PlotConfig {
        let mut config = self.config.clone();
        config.series = series.into_iter().collect();
        config
    }

    fn render_to(&self, path: &Path, config: &PlotConfig) -> Result<Canvas, PlotError> {
        let canvas = render(config)?;
        self.encoder.encode(&canvas, path)?;
        Ok(canvas)
    }

    /// Plot `function` sampled at `num + 1` points over `[x_min, x_max]`.
    pub fn plot_fn(
        &self,
        path: impl AsRef<Path>,
        function: impl Fn(f64) -> f64,
        num: u32,
        x_min: f64,
        x_max: f64,
    ) -> Result<Canvas, PlotError> {
        let series = self.styled(Series::from_fn(function, num, x_min, x_max, self.line_style));
        self.render_to(path.as_ref(), &self.layer(Some(series)))
    }

    /// Plot the polyline through `(xs[i], ys[i])`.
    pub fn plot_points(
        &self,
        path: impl AsRef<Path>,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Canvas, PlotError> {
        let series = self.styled(Series::from_xy(xs, ys, self.line_style)?);
        self.render_to(path.as_ref(), &self.layer(Some(series)))
    }

    /// Plot the background (and axes, when enabled) only.
    pub fn plot_empty(&self, path: impl AsRef<Path>) -> Result<Canvas, PlotError> {
        self.render_to(path.as_ref(), &self.layer(None))
    }

    /// Open a continuous plot with an empty first layer and write it to `path`.
    ///
    /// The plot only counts as open once that first write succeeds.
    pub fn open_continuous(&mut self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        if self.continuous.is_some() {
            return Err(PlotError::SessionAlreadyOpen);
        }
        let config = self.layer(None);
        self.open_with(path.as_ref(), &config)
    }

    fn open_with(&mut self, path: &Path, config: &PlotConfig) -> Result<(), PlotError> {
        let session = ContinuousSession::open(config)?;
        self.encoder.encode(session.canvas(), path)?;
        self.continuous = Some(session);
        Ok(())
    }

    /// Sample `function` onto the continuous plot, opening it if needed, and
    /// write the accumulated image to `path`.
    pub fn plot_fn_continuous(
        &mut self,
        path: impl AsRef<Path>,
        function: impl Fn(f64) -> f64,
        num: u32,
        x_min: f64,
        x_max: f64,
    ) -> Result<(), PlotError> {
        let series = self.styled(Series::from_fn(function, num, x_min, x_max, self.line_style));
        self.draw_continuous(path.as_ref(), series)
    }

    /// Add the polyline through `(xs[i], ys[i])` to the continuous plot.
    pub fn plot_points_continuous(
        &mut self,
        path: impl AsRef<Path>,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<(), PlotError> {
        let series = self.styled(Series::from_xy(xs, ys, self.line_style)?);
        self.draw_continuous(path.as_ref(), series)
    }

    /// A failed write leaves an already open plot open, with the new layer
    /// drawn, so the next call rewrites the whole image.
    fn draw_continuous(&mut self, path: &Path, series: Series) -> Result<(), PlotError> {
        let config = self.layer(Some(series));
        match self.continuous.as_mut() {
            Some(session) => {
                session.amend(&config)?;
                self.encoder.encode(session.canvas(), path)
            }
            None => self.open_with(path, &config),
        }
    }

    pub fn is_continuous_open(&self) -> bool {
        self.continuous.is_some()
    }

    /// The canvas of the open continuous plot, if any.
    pub fn continuous_canvas(&self) -> Option<&Canvas> {
        self.continuous.as_ref().map(ContinuousSession::canvas)
    }

    /// Close the continuous plot and return its canvas.
    pub fn finish_continuous(&mut self) -> Result<Canvas, PlotError> {
        self.continuous
            .take()
            .map(ContinuousSession::finish)
            .ok_or(PlotError::NoOpenSession)
    }
}
