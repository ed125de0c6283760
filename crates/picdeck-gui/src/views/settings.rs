use eframe::egui;
use picdeck_async_runtime::DeckCommand;
use picdeck_export::{ExportOptions, PageSize};
use tokio::sync::mpsc;

use crate::ui_components::{MarginsEditor, enum_selector};

pub fn show_settings(
    ui: &mut egui::Ui,
    options: &mut ExportOptions,
    command_tx: &mpsc::UnboundedSender<DeckCommand>,
) {
    egui::CollapsingHeader::new("📐 Page")
        .default_open(true)
        .show(ui, |ui| {
            let sizes = [
                (PageSize::A4, "A4"),
                (PageSize::Letter, "Letter"),
                (PageSize::Legal, "Legal"),
            ];
            enum_selector(ui, "page_size", "Page size:", &mut options.page_size, &sizes);
        });

    egui::CollapsingHeader::new("📏 Margins")
        .default_open(true)
        .show(ui, |ui| {
            MarginsEditor::new(
                &mut options.margins.top_cm,
                &mut options.margins.right_cm,
                &mut options.margins.bottom_cm,
                &mut options.margins.left_cm,
                10.0,
            )
            .show(ui);
        });

    egui::CollapsingHeader::new("💾 Output")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("File name:");
                ui.text_edit_singleline(&mut options.file_name);
            });
            ui.small(format!("Will be saved as {}", options.resolved_file_name()));

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                show_config_buttons(ui, options, command_tx);
            });
        });
}

fn show_config_buttons(
    ui: &mut egui::Ui,
    options: &ExportOptions,
    command_tx: &mpsc::UnboundedSender<DeckCommand>,
) {
    if ui.button("💾 Save settings").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("picdeck_config.json")
            .save_file()
        {
            let _ = command_tx.send(DeckCommand::SaveConfig {
                options: options.clone(),
                path,
            });
        }
    }

    if ui.button("📂 Load settings").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(DeckCommand::LoadConfig { path });
        }
    }
}
