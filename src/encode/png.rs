use std::path::Path;

use image::ImageFormat;

use super::Encoder;
use crate::error::ProcessError;
use crate::matting::PixelGrid;

/// Encoder that always writes PNG
///
/// The point of matting is the alpha channel, so output is forced to a
/// lossless format that keeps per-pixel alpha, whatever the input was.
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn encode(&self, grid: &PixelGrid, path: &Path) -> Result<(), ProcessError> {
        grid.save_with_format(path, ImageFormat::Png)
            .map_err(ProcessError::Encode)
    }
}
