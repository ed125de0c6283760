use eframe::egui;
use picdeck_async_runtime::DeckCommand;
use picdeck_core::ImageCollection;
use picdeck_export::ExportOptions;
use tokio::sync::mpsc;

use crate::confirm::{ConfirmDialog, DestructiveAction};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

pub fn show_actions(
    ui: &mut egui::Ui,
    collection: &mut ImageCollection,
    options: &ExportOptions,
    confirm: &mut Option<ConfirmDialog>,
    command_tx: &mpsc::UnboundedSender<DeckCommand>,
) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("➕ Add images…").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_files()
            {
                let _ = command_tx.send(DeckCommand::LoadImages { paths });
            }
        }

        let has_images = !collection.is_empty();
        let select_label = if collection.all_selected() {
            "Deselect all"
        } else {
            "Select all"
        };
        if ui
            .add_enabled(has_images, egui::Button::new(select_label))
            .clicked()
        {
            collection.toggle_select_all();
        }

        let selected = collection.selected_count();
        if ui
            .add_enabled(
                selected > 0,
                egui::Button::new(format!("🗑 Delete selected ({selected})")),
            )
            .clicked()
        {
            *confirm = Some(ConfirmDialog::new(
                DestructiveAction::DeleteSelected,
                collection,
            ));
        }

        if ui
            .add_enabled(has_images, egui::Button::new("🗑 Delete all"))
            .clicked()
        {
            *confirm = Some(ConfirmDialog::new(DestructiveAction::DeleteAll, collection));
        }

        if ui
            .add_enabled(has_images, egui::Button::new("📄 Export PDF…"))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .set_file_name(options.resolved_file_name())
                .save_file()
            {
                log::info!("Exporting {} page(s) to {}", collection.len(), path.display());
                let _ = command_tx.send(DeckCommand::Export {
                    records: collection.records(),
                    options: options.clone(),
                    output_path: path,
                });
            }
        }
    });
}
