mod flat;
pub mod types;

pub use flat::FlatColorMatting;
pub use types::{MatteError, MattingEngine, PixelGrid, DEFAULT_TOLERANCE};
