//! A CPU rasterizer for 2-D scatter and line plots.
//!
//! - Linear mapping between data, normalized, pixel and display space
//! - Auto bounds with per-axis overrides and degenerate-range repair
//! - Liang–Barsky clipping, thick and dashed lines, six marker glyphs
//! - Single-shot renders and continuous plots built up layer by layer
//! - Lossless PNG output
//!
//! Quick start:
//!
//! ```no_run
//! use bitmap_plot::{Color, LineStyle, PlotBuilder, PngEncoder, Encoder, Series, render};
//!
//! let series = Series::from_fn(f64::sin, 64, -6.28, 6.28, LineStyle::Solid)
//!     .with_color(Color::from_rgb(0.2, 0.6, 1.0))
//!     .with_label("sin");
//!
//! let config = PlotBuilder::new()
//!     .with_x_lim(-6.28, 6.28)
//!     .with_y_lim(-1.0, 1.0)
//!     .add_series(series)
//!     .build()?;
//!
//! let canvas = render(&config)?;
//! PngEncoder.encode(&canvas, std::path::Path::new("sin.png"))?;
//! # Ok::<(), bitmap_plot::PlotError>(())
//! ```
//!
//! See `demos/` for more.
pub mod axes;
pub mod bounds;
pub mod camera;
pub mod canvas;
pub mod clip;
pub mod color;
pub mod config;
pub mod encoder;
pub mod line_pattern;
pub mod picks;
pub mod plot_builder;
pub mod plot_session;
pub mod plotter;
pub mod point;
pub mod raster;
pub mod series;
pub mod ticks;

mod axes_labels;
mod error;

// Re-exports of public types.
pub use axes::{AxesConfig, XAxisPlacement, YAxisPlacement};
pub use bounds::{AxisLimits, ClipRect, compute_bounds};
pub use camera::Camera;
pub use canvas::{Canvas, Rgba};
pub use clip::clip_segment;
pub use color::Color;
pub use config::PlotConfig;
pub use encoder::{Encoder, PngEncoder, decode_png, read_png};
pub use error::PlotError;
pub use line_pattern::{LinePattern, PatternPhase};
pub use picks::PickBuffer;
pub use plot_builder::PlotBuilder;
pub use plot_session::{ContinuousSession, render};
pub use plotter::Plotter;
pub use point::{MarkerType, Point};
pub use series::{LineStyle, Series, SeriesError};
