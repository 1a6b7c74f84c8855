#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let app_logger = logger::AppLogger::new(500);
    if let Err(e) = app_logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }

    // The worker task runs on this runtime; eframe owns the UI thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("imgcom"),
        ..Default::default()
    };

    eframe::run_native(
        "imgcom",
        options,
        Box::new(move |cc| Ok(Box::new(app::ImgcomApp::new(cc, tokio_handle, app_logger)))),
    )
}
