//! Startup error types
//!
//! Nothing here is recoverable: the binary reports the error and exits.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an image file into a sprite bitmap
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot scale {} to {width}x{height}", path.display())]
    InvalidSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Anything that stops the game from opening its window
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Assets(#[from] AssetError),

    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
