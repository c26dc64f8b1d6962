use image::Rgba;

use super::types::{MatteError, MattingEngine, PixelGrid};

/// Value written over every background pixel: white, fully transparent.
/// The color channels stay observable in tools that do not premultiply
/// alpha, so the exact bytes matter for output compatibility.
const MATTED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Flat-color matting engine
///
/// Samples the top-left pixel as the reference background color and keys
/// out every pixel whose color channels all sit within `tolerance` of it.
/// There is no spatial awareness: an interior pixel that happens to match
/// the reference numerically is matted even when it belongs to the
/// subject. Known limitation of single-reference keying.
pub struct FlatColorMatting;

impl MattingEngine for FlatColorMatting {
    fn matte(&self, grid: &PixelGrid, tolerance: i32) -> Result<PixelGrid, MatteError> {
        if tolerance < 0 {
            return Err(MatteError::NegativeTolerance(tolerance));
        }

        let (width, height) = grid.dimensions();
        if width == 0 || height == 0 {
            return Err(MatteError::EmptyGrid);
        }

        // Reference color is the top-left pixel; its alpha is not consulted.
        let reference = *grid.get_pixel(0, 0);

        let mut output = grid.clone();
        for pixel in output.pixels_mut() {
            if is_background(pixel, &reference, tolerance) {
                *pixel = MATTED;
            }
        }

        Ok(output)
    }
}

/// Background iff every color channel is strictly within `tolerance` of
/// the reference. Per-channel thresholds, not a combined distance metric:
/// the two classify differently for the same tolerance value.
#[inline]
fn is_background(pixel: &Rgba<u8>, reference: &Rgba<u8>, tolerance: i32) -> bool {
    let dr = (i32::from(pixel[0]) - i32::from(reference[0])).abs();
    let dg = (i32::from(pixel[1]) - i32::from(reference[1])).abs();
    let db = (i32::from(pixel[2]) - i32::from(reference[2])).abs();
    dr < tolerance && dg < tolerance && db < tolerance
}
