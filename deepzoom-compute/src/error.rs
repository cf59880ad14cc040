use deepzoom_core::{ConfigError, PixelRect};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("malformed worker message: {0}")]
    Message(#[from] serde_json::Error),

    #[error("cannot render an empty canvas ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("tile {tile:?} lies outside the {width}x{height} canvas")]
    TileOutOfBounds {
        tile: PixelRect,
        width: u32,
        height: u32,
    },
}
