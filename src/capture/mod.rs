mod webcam;

pub use webcam::WebcamCapture;

use image::RgbImage;
use thiserror::Error;

/// Errors that can occur while capturing frames.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to open device: {0}")]
    OpenFailed(String),

    #[error("Failed to capture frame: {0}")]
    CaptureFailed(String),

    #[error("Failed to decode frame: {0}")]
    DecodeFailed(String),
}

/// Trait for camera capture sources
pub trait CaptureSource {
    /// Capture a single frame
    fn capture_frame(&mut self) -> Result<RgbImage, CaptureError>;

    /// Get the resolution snapshots are taken at
    fn resolution(&self) -> (u32, u32);
}
