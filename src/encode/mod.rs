mod png;

pub use png::PngEncoder;

use std::path::Path;

use crate::error::ProcessError;
use crate::matting::PixelGrid;

/// Trait for image encoders
pub trait Encoder {
    /// Write a processed grid to the given destination
    fn encode(&self, grid: &PixelGrid, path: &Path) -> Result<(), ProcessError>;
}
