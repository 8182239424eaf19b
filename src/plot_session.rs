//! Single-shot rendering and continuous (layered) plot sessions.

use crate::{
    PlotError,
    axes::draw_axes,
    axes_labels::draw_labels,
    camera::Camera,
    canvas::Canvas,
    config::PlotConfig,
    raster::draw_series,
};

/// Render `config` onto a fresh canvas.
///
/// Fills the background, draws the axes, title and axis labels when axes are
/// enabled, then every series in order, so later series paint over earlier
/// ones.
pub fn render(config: &PlotConfig) -> Result<Canvas, PlotError> {
    config.validate()?;
    let camera = config.camera();
    let mut canvas = Canvas::new(config.width, config.height, config.background);
    draw_axes(&mut canvas, &camera, &config.axes);
    if config.axes.visible {
        draw_labels(&mut canvas, config);
    }
    draw_layer(&mut canvas, &camera, config);
    Ok(canvas)
}

fn draw_layer(canvas: &mut Canvas, camera: &Camera, config: &PlotConfig) {
    log::debug!(
        "drawing {} series onto {}x{} canvas, bounds {:?}",
        config.series.len(),
        canvas.width(),
        canvas.height(),
        camera.rect
    );
    for s in &config.series {
        draw_series(canvas, camera, s);
    }
}

/// An open continuous plot: one canvas that successive configurations are
/// drawn onto without clearing.
///
/// The session owns its canvas; [`ContinuousSession::finish`] consumes the
/// session and hands the canvas back, so a session cannot be finished twice.
#[derive(Debug)]
pub struct ContinuousSession {
    canvas: Canvas,
    camera: Camera,
    layers: usize,
}

impl ContinuousSession {
    /// Start a session with the first layer. Identical to [`render`].
    pub fn open(config: &PlotConfig) -> Result<Self, PlotError> {
        let canvas = render(config)?;
        log::info!(
            "opened continuous plot {}x{}",
            canvas.width(),
            canvas.height()
        );
        Ok(Self {
            canvas,
            camera: config.camera(),
            layers: 1,
        })
    }

    /// Draw `config`'s series on top of the existing pixels.
    ///
    /// Bounds and the pixel mapping are recomputed from `config`. The
    /// background and axes are not redrawn. The image size must not change.
    pub fn amend(&mut self, config: &PlotConfig) -> Result<(), PlotError> {
        config.validate()?;
        let expected = (self.canvas.width(), self.canvas.height());
        let actual = (config.width, config.height);
        if expected != actual {
            return Err(PlotError::CanvasSizeMismatch { expected, actual });
        }
        self.camera = config.camera();
        draw_layer(&mut self.canvas, &self.camera, config);
        self.layers += 1;
        Ok(())
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The mapping used by the most recent layer.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Number of layers drawn so far, including the first.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Close the session and take the canvas.
    pub fn finish(self) -> Canvas {
        log::info!("finished continuous plot after {} layers", self.layers);
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AxisLimits, Color,
        series::{LineStyle, Series},
    };

    fn config(series: Vec<Series>) -> PlotConfig {
        PlotConfig {
            width: 120,
            height: 90,
            padding_x: 10,
            padding_y: 10,
            limits: AxisLimits::explicit(-1.0, 1.0, -1.0, 1.0),
            ..Default::default()
        }
        .with_series(series)
    }

    fn diagonal(color: Color) -> Series {
        Series::line(vec![[-1.0, -1.0], [1.0, 1.0]], LineStyle::Solid).with_color(color)
    }

    fn anti_diagonal(color: Color) -> Series {
        Series::line(vec![[-1.0, 1.0], [1.0, -1.0]], LineStyle::Solid).with_color(color)
    }

    #[test]
    fn render_rejects_bad_geometry() {
        let c = PlotConfig {
            height: 48,
            padding_y: 24,
            ..Default::default()
        };
        assert!(matches!(render(&c), Err(PlotError::InvalidGeometry { .. })));
    }

    #[test]
    fn single_layer_session_matches_render() {
        let c = config(vec![diagonal(Color::RED)]);
        let once = render(&c).unwrap();
        let session = ContinuousSession::open(&c).unwrap();
        assert_eq!(session.layers(), 1);
        assert_eq!(session.finish(), once);
    }

    #[test]
    fn amend_keeps_earlier_layers() {
        let mut session = ContinuousSession::open(&config(vec![diagonal(Color::RED)])).unwrap();
        session.amend(&config(vec![anti_diagonal(Color::BLUE)])).unwrap();
        assert_eq!(session.layers(), 2);
        let canvas = session.finish();
        assert!(canvas.count_color(Color::RED) > 0);
        assert!(canvas.count_color(Color::BLUE) > 0);
    }

    #[test]
    fn amend_uses_its_own_bounds() {
        let mut session = ContinuousSession::open(&config(vec![])).unwrap();
        let mut wide = config(vec![diagonal(Color::BLUE)]);
        wide.limits = AxisLimits::explicit(-10.0, 10.0, -10.0, 10.0);
        session.amend(&wide).unwrap();
        assert_eq!(session.camera().rect.x_max, 10.0);
    }

    #[test]
    fn amend_rejects_size_change() {
        let mut session = ContinuousSession::open(&config(vec![])).unwrap();
        let mut other = config(vec![]);
        other.width = 200;
        assert!(matches!(
            session.amend(&other),
            Err(PlotError::CanvasSizeMismatch {
                expected: (120, 90),
                actual: (200, 90)
            })
        ));
        assert_eq!(session.layers(), 1);
    }

    #[test]
    fn amend_does_not_redraw_background() {
        let mut c = config(vec![diagonal(Color::RED)]);
        let mut session = ContinuousSession::open(&c).unwrap();
        c.background = Color::BLACK;
        c.series.clear();
        session.amend(&c).unwrap();
        assert_eq!(session.canvas().count_color(Color::BLACK), 0);
    }
}
