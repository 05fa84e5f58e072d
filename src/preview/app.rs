use crate::capture::CaptureSource;
use crate::snapshot::SnapshotSink;
use eframe::egui;
use image::RgbImage;
use std::path::PathBuf;

/// Outcome of one capture tick.
enum Step {
    Previewed(RgbImage),
    Saved(PathBuf),
    Stopped,
}

/// Live preview window. Reads one frame per update, shows it, and saves a
/// single snapshot when the save key is pressed.
pub struct PreviewApp<C, S> {
    capture: C,
    sink: S,
    texture: Option<egui::TextureHandle>,
    finished: bool,
}

const SAVE_KEY: egui::Key = egui::Key::Q;

impl<C, S> PreviewApp<C, S>
where
    C: CaptureSource,
    S: SnapshotSink,
{
    pub fn new(capture: C, sink: S) -> Self {
        Self {
            capture,
            sink,
            texture: None,
            finished: false,
        }
    }

    /// Read one frame and decide what to do with it. Separated from the GUI
    /// so the exit paths can be exercised without a camera or a window.
    fn step(&mut self, save_requested: bool) -> Step {
        let frame = match self.capture.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Capture ended: {}", e);
                self.finished = true;
                return Step::Stopped;
            }
        };

        if save_requested {
            self.finished = true;
            return match self.sink.save(&frame) {
                Ok(path) => Step::Saved(path),
                Err(e) => {
                    tracing::error!("Failed to save snapshot: {:#}", e);
                    Step::Stopped
                }
            };
        }

        Step::Previewed(frame)
    }
}

impl<C, S> eframe::App for PreviewApp<C, S>
where
    C: CaptureSource,
    S: SnapshotSink,
{
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.finished {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let save_requested = ctx.input(|i| i.key_pressed(SAVE_KEY));

        match self.step(save_requested) {
            Step::Previewed(frame) => {
                let image = egui::ColorImage::from_rgb(
                    [frame.width() as usize, frame.height() as usize],
                    frame.as_raw(),
                );

                if let Some(texture) = &mut self.texture {
                    texture.set(image, Default::default());
                } else {
                    self.texture = Some(ctx.load_texture("preview", image, Default::default()));
                }

                // Keep capturing even while idle
                ctx.request_repaint();
            }
            Step::Saved(path) => {
                tracing::info!("Snapshot written to {}, exiting", path.display());
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Step::Stopped => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                ui.add(egui::Image::new(texture).shrink_to_fit());
            } else {
                ui.colored_label(egui::Color32::GRAY, "Waiting for camera...");
            }
        });
    }
}
