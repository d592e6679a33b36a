// File: crates/chart-core/src/error.rs
// Summary: Error type shared by dataset generation, rendering and resampling.

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error("invalid revenue distribution: {0}")]
    Distribution(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
