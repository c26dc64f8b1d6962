use thiserror::Error;

use crate::matting::MatteError;

/// Per-file failure taxonomy
///
/// Every variant is terminal for a single input file. The batch driver
/// logs the failing path together with the error and moves on; no failure
/// aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Input bytes are not a decodable raster image
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// The decoded grid or the tolerance is unusable for matting
    #[error(transparent)]
    Matte(#[from] MatteError),

    /// The processed grid could not be written to its destination
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}
