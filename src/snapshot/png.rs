use super::SnapshotSink;
use anyhow::{Context, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

pub struct PngSnapshot {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl PngSnapshot {
    pub fn new<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
        }
    }
}

impl SnapshotSink for PngSnapshot {
    fn save(&mut self, frame: &RgbImage) -> Result<PathBuf> {
        // Resize frame if needed
        let frame = if frame.dimensions() != (self.width, self.height) {
            image::imageops::resize(
                frame,
                self.width,
                self.height,
                image::imageops::FilterType::Lanczos3,
            )
        } else {
            frame.clone()
        };

        frame
            .save(&self.path)
            .with_context(|| format!("Failed to write snapshot to {}", self.path.display()))?;

        tracing::info!("Saved snapshot to {}", self.path.display());

        Ok(self.path.clone())
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn save_resizes_to_configured_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        let mut sink = PngSnapshot::new(&path, 640, 480);
        assert_eq!(sink.resolution(), (640, 480));

        let frame = RgbImage::from_pixel(1280, 720, Rgb([12, 34, 56]));
        let written = sink.save(&frame).unwrap();

        assert_eq!(written, path);
        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 640);
        assert_eq!(saved.height(), 480);
    }

    #[test]
    fn save_keeps_matching_frames_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        let mut sink = PngSnapshot::new(&path, 4, 2);

        let frame = RgbImage::from_pixel(4, 2, Rgb([200, 100, 50]));
        sink.save(&frame).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (4, 2));
        assert_eq!(saved.get_pixel(0, 0), &Rgb([200, 100, 50]));
    }

    #[test]
    fn save_reports_unwritable_path() {
        let mut sink = PngSnapshot::new("/nonexistent/dir/pic.png", 4, 2);
        let frame = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        assert!(sink.save(&frame).is_err());
    }
}
