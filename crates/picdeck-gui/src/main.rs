#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod confirm;
mod gesture;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

fn main() -> anyhow::Result<()> {
    let ui_logger = logger::UiLogger::new(256);
    ui_logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("picdeck"),
        ..Default::default()
    };

    eframe::run_native(
        "picdeck",
        options,
        Box::new(move |cc| Ok(Box::new(app::DeckApp::new(cc, tokio_handle, ui_logger)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
