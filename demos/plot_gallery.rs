//! Writes a handful of plots into a directory (first argument, or the
//! current directory).
use std::path::PathBuf;

use bitmap_plot::{
    AxesConfig, AxisLimits, Color, Encoder, LineStyle, MarkerType, PlotBuilder, PlotConfig,
    PlotError, Plotter, PngEncoder, Series, render,
};

fn main() -> Result<(), PlotError> {
    let out: PathBuf = std::env::args().nth(1).unwrap_or_else(|| ".".into()).into();
    std::fs::create_dir_all(&out)?;

    let trig = AxisLimits::explicit(-6.28, 6.28, -1.0, 1.0);
    let mut plotter = Plotter::new(PlotConfig {
        limits: trig,
        axes: AxesConfig::shown(),
        ..Default::default()
    });

    // A sampled function.
    plotter.set_color(Color::BLUE);
    plotter.plot_fn(out.join("sin.png"), f64::sin, 64, -6.28, 6.28)?;

    // Explicit points with auto bounds.
    plotter.config_mut().limits = Default::default();
    plotter.set_color(Color::GREEN);
    plotter.set_line_style(LineStyle::Dotted);
    plotter.plot_points(
        out.join("points.png"),
        &[-2.0, -1.0, 0.0, 1.0, 2.0],
        &[2.0, -1.0, -2.0, -1.0, 2.0],
    )?;

    // Two functions layered onto one image.
    plotter.config_mut().limits = trig;
    plotter.set_line_style(LineStyle::Solid);
    plotter.set_color(Color::BLUE);
    plotter.plot_fn_continuous(out.join("layers.png"), f64::sin, 64, -6.28, 6.28)?;
    plotter.set_color(Color::RED);
    plotter.plot_fn_continuous(out.join("layers.png"), f64::cos, 64, -6.28, 6.28)?;
    plotter.finish_continuous()?;

    // Every line style, one row each.
    let styles = [
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DotDash,
        LineStyle::LongDash,
        LineStyle::TwoDash,
    ];
    let mut builder = PlotBuilder::new().with_x_lim(0.0, 10.0).with_y_lim(0.0, 7.0);
    for (i, style) in styles.into_iter().enumerate() {
        let y = i as f64 + 1.0;
        let s = Series::line(vec![[0.5, y], [5.0, y + 0.4], [9.5, y]], style)
            .with_color(Color::from_rgb(0.1 * i as f32, 0.2, 0.6))
            .with_thickness(3);
        builder = builder.add_series(s);
    }
    let canvas = render(&builder.build()?)?;
    PngEncoder.encode(&canvas, &out.join("styles.png"))?;

    // Every marker glyph.
    let markers = [
        MarkerType::Cross,
        MarkerType::Circle,
        MarkerType::FilledCircle,
        MarkerType::Triangle,
        MarkerType::FilledTriangle,
        MarkerType::Pixel,
    ];
    let mut builder = PlotBuilder::new()
        .with_size(400, 300)
        .with_x_lim(0.0, 7.0)
        .with_y_lim(-1.5, 1.5);
    for (i, marker) in markers.into_iter().enumerate() {
        let x = i as f64 + 0.5;
        let positions = (0..8).map(|k| [x + k as f64 * 0.08, (x + k as f64).sin()]).collect();
        builder = builder.add_series(
            Series::markers(positions, marker).with_color(Color::from_rgb(0.8, 0.2, 0.1 * i as f32)),
        );
    }
    let canvas = render(&builder.build()?)?;
    PngEncoder.encode(&canvas, &out.join("markers.png"))?;

    println!("wrote plots to {}", out.display());
    Ok(())
}
