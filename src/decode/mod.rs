mod file;

pub use file::FileDecoder;

use std::path::Path;

use crate::error::ProcessError;
use crate::matting::PixelGrid;

/// Trait for image decoders
pub trait Decoder {
    /// Decode one input file into an RGBA pixel grid
    ///
    /// Images without an alpha channel decode as fully opaque.
    fn decode(&self, path: &Path) -> Result<PixelGrid, ProcessError>;
}
