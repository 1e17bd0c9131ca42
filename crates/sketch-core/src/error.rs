// File: crates/sketch-core/src/error.rs
// Summary: Library error type for surface allocation, readback, and encoding failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAlloc { width: i32, height: i32 },
    #[error("surface has no pixels to export")]
    EmptySurface,
    #[error("encode PNG failed")]
    Encode,
    #[error("pixel readback failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SketchError>;
