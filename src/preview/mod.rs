mod app;

pub use app::PreviewApp;
