use crate::series::SeriesError;

/// Errors returned by rendering, sessions and encoding.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("invalid geometry: {width}x{height} with padding {padding_x}x{padding_y}")]
    InvalidGeometry {
        width: u32,
        height: u32,
        padding_x: u32,
        padding_y: u32,
    },
    #[error("axis limits must be finite with min <= max")]
    InvalidAxisLimits,
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
    #[error("canvas is {expected:?} but the plot asks for {actual:?}")]
    CanvasSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("a continuous plot is already open")]
    SessionAlreadyOpen,
    #[error("no continuous plot is open")]
    NoOpenSession,
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("pixel buffer does not match the image size")]
    BufferSize,
}
