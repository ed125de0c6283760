use std::path::PathBuf;

use picdeck_async_runtime::DeckUpdate;
use picdeck_core::ImageRecord;
use picdeck_export::ExportOptions;
use tokio::sync::mpsc;

pub async fn handle_export(
    records: Vec<ImageRecord>,
    options: ExportOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<DeckUpdate>,
) {
    let _ = update_tx.send(DeckUpdate::Progress {
        operation: format!("Exporting {} page(s)", records.len()),
        current: 0,
        total: 1,
    });

    match picdeck_export::export_pdf(&records, &options, &output_path).await {
        Ok(page_count) => {
            let _ = update_tx.send(DeckUpdate::ExportComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            let _ = update_tx.send(DeckUpdate::Error {
                message: format!("Export failed: {e}"),
            });
        }
    }
}

pub async fn handle_save_config(
    options: ExportOptions,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<DeckUpdate>,
) {
    match options.save(&path).await {
        Ok(()) => log::info!("Configuration saved to {}", path.display()),
        Err(e) => {
            let _ = update_tx.send(DeckUpdate::Error {
                message: format!("Failed to save configuration: {e}"),
            });
        }
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &mpsc::UnboundedSender<DeckUpdate>) {
    match ExportOptions::load(&path).await {
        Ok(options) => {
            let _ = update_tx.send(DeckUpdate::ConfigLoaded { options });
        }
        Err(e) => {
            let _ = update_tx.send(DeckUpdate::Error {
                message: format!("Failed to load configuration: {e}"),
            });
        }
    }
}
