mod png;

pub use png::PngSnapshot;

use anyhow::Result;
use image::RgbImage;
use std::path::PathBuf;

/// Trait for snapshot destinations
pub trait SnapshotSink {
    /// Persist a frame, returning the path it was written to
    fn save(&mut self, frame: &RgbImage) -> Result<PathBuf>;

    /// Get the resolution saved snapshots are resized to
    fn resolution(&self) -> (u32, u32);
}
