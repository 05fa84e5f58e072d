mod capture;
mod preview;
mod snapshot;

use anyhow::{Context, Result};
use capture::{CaptureSource, WebcamCapture};
use clap::Parser;
use preview::PreviewApp;
use snapshot::PngSnapshot;
use std::path::PathBuf;

const WINDOW_TITLE: &str = "camsnap";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input webcam device index
    #[arg(short, long, default_value_t = 0)]
    device: u32,

    /// Snapshot resolution width
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Snapshot resolution height
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Snapshot output path
    #[arg(short, long, default_value = "pic.png")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("camsnap starting");
    tracing::info!("Device: {}", args.device);
    tracing::info!(
        "Snapshot: {}x{} -> {}",
        args.width,
        args.height,
        args.output.display()
    );
    tracing::info!("Press 'q' in the preview window to save a snapshot and exit");

    // Open the camera before creating any window, so a failed open leaves
    // no window and no file behind.
    let capture = WebcamCapture::new(args.device, args.width, args.height)
        .context("Failed to initialize webcam capture")?;

    let sink = PngSnapshot::new(&args.output, args.width, args.height);

    let (width, height) = capture.resolution();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(capture, sink)))),
    )
    .map_err(|e| anyhow::anyhow!("Preview window failed: {e}"))?;

    Ok(())
}
