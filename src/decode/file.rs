use std::path::Path;

use super::Decoder;
use crate::error::ProcessError;
use crate::matting::PixelGrid;

/// Decoder backed by `image::open`
///
/// Handles PNG, JPEG, and every other format the `image` crate enables by
/// default. Unreadable files surface as decode failures too, since the
/// codec probe is the first thing that touches the bytes.
pub struct FileDecoder;

impl Decoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<PixelGrid, ProcessError> {
        let img = image::open(path).map_err(ProcessError::Decode)?;
        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    use super::{Decoder, FileDecoder};

    #[test]
    fn alpha_less_input_decodes_fully_opaque() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solid.jpg");
        RgbImage::from_pixel(4, 4, Rgb([180, 40, 40]))
            .save(&path)
            .unwrap();

        let grid = FileDecoder.decode(&path).unwrap();
        assert_eq!(grid.dimensions(), (4, 4));
        assert!(grid.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(FileDecoder.decode(&path).is_err());
    }
}
