//! Turning a finished [`Canvas`] into image bytes on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{ExtendedColorType, ImageEncoder, ImageFormat, codecs::png};

use crate::{PlotError, canvas::Canvas};

/// Writes a canvas to `path`.
///
/// Implementations must either produce the complete file or leave nothing
/// behind at `path`.
pub trait Encoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<(), PlotError>;
}

/// Lossless PNG output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl PngEncoder {
    /// Encode into an in-memory PNG.
    pub fn encode_to_vec(&self, canvas: &Canvas) -> Result<Vec<u8>, PlotError> {
        let mut out = Vec::new();
        png::PngEncoder::new(&mut out).write_image(
            canvas.as_bytes(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}

impl Encoder for PngEncoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<(), PlotError> {
        let bytes = self.encode_to_vec(canvas)?;
        write_atomic(path, &bytes)?;
        log::info!(
            "wrote {}x{} png to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        Ok(())
    }
}

/// Write through a sibling temp file, then rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

/// Decode PNG bytes back into a canvas.
pub fn decode_png(bytes: &[u8]) -> Result<Canvas, PlotError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    let (width, height) = img.dimensions();
    Canvas::from_rgba8(width, height, img.as_raw())
}

/// Read a PNG file into a canvas.
pub fn read_png(path: impl AsRef<Path>) -> Result<Canvas, PlotError> {
    decode_png(&fs::read(path)?)
}
