use image::RgbaImage;
use thiserror::Error;

/// Decoded pixel grid for one image: RGBA channels, row-major order.
/// Dimensions and ordering are preserved between input and output grids.
pub type PixelGrid = RgbaImage;

/// Default per-channel tolerance for background classification.
pub const DEFAULT_TOLERANCE: i32 = 30;

/// Inputs the engine refuses to matte.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatteError {
    /// There is no top-left pixel to sample a reference color from.
    #[error("image has no pixels to sample a background color from")]
    EmptyGrid,

    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(i32),
}

/// Trait for background matting engines
/// Allows swapping keying strategies without touching the batch driver
pub trait MattingEngine {
    /// Produce a new grid with background pixels made fully transparent
    ///
    /// # Arguments
    /// * `grid` - Input RGBA grid
    /// * `tolerance` - Maximum per-channel absolute color difference for a
    ///   pixel to be classified as background
    ///
    /// # Returns
    /// * A grid with the same dimensions and row-major order as the input,
    ///   where background pixels are fully transparent and foreground
    ///   pixels pass through unchanged
    fn matte(&self, grid: &PixelGrid, tolerance: i32) -> Result<PixelGrid, MatteError>;
}
