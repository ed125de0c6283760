use std::collections::HashMap;

use eframe::egui;
use picdeck_async_runtime::{DeckCommand, DeckUpdate};
use picdeck_core::{DragReorderEngine, ImageCollection, ImageId};
use picdeck_export::ExportOptions;
use tokio::sync::mpsc;

use crate::confirm::ConfirmDialog;
use crate::gesture::GestureAdapter;
use crate::logger::UiLogger;
use crate::views::{DeckViewState, show_actions, show_deck, show_settings};
use crate::worker;

struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct DeckApp {
    collection: ImageCollection,
    drag: DragReorderEngine,
    gesture: GestureAdapter,
    view: DeckViewState,
    options: ExportOptions,
    confirm: Option<ConfirmDialog>,
    textures: HashMap<ImageId, egui::TextureHandle>,
    status: String,
    progress: Option<ProgressState>,
    command_tx: mpsc::UnboundedSender<DeckCommand>,
    update_rx: mpsc::UnboundedReceiver<DeckUpdate>,
    logger: UiLogger,
}

impl DeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: UiLogger,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(1.2);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        tokio_handle.spawn(worker::worker_task(command_rx, update_tx));

        Self {
            collection: ImageCollection::new(),
            drag: DragReorderEngine::new(),
            gesture: GestureAdapter::new(),
            view: DeckViewState::default(),
            options: ExportOptions::default(),
            confirm: None,
            textures: HashMap::new(),
            status: "Ready".to_string(),
            progress: None,
            command_tx,
            update_rx,
            logger,
        }
    }

    /// Translate raw touch input into drag-engine calls, using the row
    /// geometry rendered last frame.
    fn process_touch_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        let now = ctx.input(|i| i.time);
        self.gesture.process(
            &events,
            now,
            &self.view.rows,
            &mut self.collection,
            &mut self.drag,
        );
        if self.gesture.is_tracking() {
            self.view.drag_pos = self.gesture.last_pos;
        }
    }

    fn process_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !paths.is_empty() {
            let _ = self.command_tx.send(DeckCommand::LoadImages { paths });
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                DeckUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    if current >= total {
                        self.progress = None;
                    } else {
                        self.progress = Some(ProgressState {
                            operation,
                            current,
                            total,
                        });
                    }
                }
                DeckUpdate::ImageLoaded {
                    record,
                    thumb_rgba,
                    thumb_width,
                    thumb_height,
                } => {
                    let id = record.id.clone();
                    let name = record.name.clone();
                    match self.collection.append(record) {
                        Ok(()) => {
                            let image = egui::ColorImage::from_rgba_unmultiplied(
                                [thumb_width, thumb_height],
                                &thumb_rgba,
                            );
                            let texture = ctx.load_texture(
                                name.clone(),
                                image,
                                egui::TextureOptions::default(),
                            );
                            self.textures.insert(id, texture);
                            self.status = format!("Added {name}");
                        }
                        Err(err) => log::error!("Could not add {name}: {err}"),
                    }
                }
                DeckUpdate::ExportComplete { path, page_count } => {
                    self.status = format!("Exported {} page(s) to {}", page_count, path.display());
                    log::info!("{}", self.status);
                    self.progress = None;
                }
                DeckUpdate::ConfigLoaded { options } => {
                    self.options = options;
                    self.status = "Settings loaded".to_string();
                }
                DeckUpdate::Error { message } => {
                    log::error!("{message}");
                    self.status = message;
                    self.progress = None;
                }
            }
        }
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = self.confirm.take() {
            match dialog.show(ctx) {
                Some(true) => {
                    let removed = dialog.action.apply(&mut self.collection);
                    self.status = format!("Removed {removed} image(s)");
                    log::info!("{}", self.status);
                }
                Some(false) => {}
                None => self.confirm = Some(dialog),
            }
        }
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match &self.progress {
                Some(progress) => {
                    let fraction = progress.current as f32 / progress.total.max(1) as f32;
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_width(160.0)
                            .text(format!(
                                "{} {}/{}",
                                progress.operation, progress.current, progress.total
                            )),
                    );
                }
                None => {
                    ui.label(&self.status);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(entry) = self.logger.latest() {
                    ui.small(format!(
                        "[{}] {}",
                        entry.timestamp.format("%H:%M:%S"),
                        entry.message
                    ));
                }
            });
        });
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_touch_input(ctx);
        self.process_dropped_files(ctx);
        self.process_updates(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::SidePanel::right("settings_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Settings");
                ui.separator();
                show_settings(ui, &mut self.options, &self.command_tx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_actions(
                ui,
                &mut self.collection,
                &self.options,
                &mut self.confirm,
                &self.command_tx,
            );
            ui.separator();
            ui.heading(format!("Images ({})", self.collection.len()));
            show_deck(
                ui,
                &mut self.collection,
                &mut self.drag,
                &mut self.view,
                &self.textures,
                &mut self.confirm,
            );
        });

        self.show_confirm_dialog(ctx);

        // Deleted records must not keep their GPU textures alive.
        let collection = &self.collection;
        self.textures.retain(|id, _| collection.contains(id));

        // A live drag or an in-flight worker operation needs frames even
        // without input; so does the touch hold timer.
        if self.drag.is_dragging() || self.progress.is_some() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
