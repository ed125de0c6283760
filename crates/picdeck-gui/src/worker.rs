use picdeck_async_runtime::{DeckCommand, DeckUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes deck commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<DeckCommand>,
    update_tx: mpsc::UnboundedSender<DeckUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
}

async fn process_command(cmd: DeckCommand, update_tx: &mpsc::UnboundedSender<DeckUpdate>) {
    match cmd {
        DeckCommand::LoadImages { paths } => {
            handlers::images::handle_load(paths, update_tx).await;
        }
        DeckCommand::Export {
            records,
            options,
            output_path,
        } => {
            handlers::export::handle_export(records, options, output_path, update_tx).await;
        }
        DeckCommand::SaveConfig { options, path } => {
            handlers::export::handle_save_config(options, path, update_tx).await;
        }
        DeckCommand::LoadConfig { path } => {
            handlers::export::handle_load_config(path, update_tx).await;
        }
    }
}
