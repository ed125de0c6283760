use std::collections::HashMap;

use eframe::egui;
use picdeck_core::{DragReorderEngine, ImageCollection, ImageId, Modality, RowBounds};

use crate::confirm::{ConfirmDialog, DestructiveAction};

const THUMB_SIZE: f32 = 64.0;
const PLACEHOLDER_HEIGHT: f32 = 12.0;

/// Per-frame geometry of the deck list.
///
/// `rows` are the rendered row bounds from the last frame, shared with
/// the touch gesture adapter so hit tests and preview both read the same
/// coordinates the user sees.
#[derive(Default)]
pub struct DeckViewState {
    pub rows: Vec<RowBounds>,
    pub drag_pos: Option<egui::Pos2>,
}

pub fn show_deck(
    ui: &mut egui::Ui,
    collection: &mut ImageCollection,
    drag: &mut DragReorderEngine,
    view: &mut DeckViewState,
    textures: &HashMap<ImageId, egui::TextureHandle>,
    confirm: &mut Option<ConfirmDialog>,
) {
    if collection.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label("Drop image files here, or use “Add images…”");
        });
        view.rows.clear();
        view.drag_pos = None;
        return;
    }

    // Snapshot row data up front so the render loop does not hold a
    // borrow while the deferred actions below mutate the collection.
    let entries: Vec<(ImageId, String, bool)> = collection
        .iter()
        .map(|r| (r.id.clone(), r.name.clone(), collection.is_selected(&r.id)))
        .collect();

    let dragged_id = drag.session().map(|s| s.source_id.clone());
    let preview_index = drag.session().map(|s| s.preview_index);

    let mut toggled: Option<(ImageId, bool)> = None;
    let mut delete_requested: Option<ImageId> = None;
    let mut drag_started: Option<ImageId> = None;

    view.rows.clear();
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let mut visible_index = 0usize;
            for (id, name, selected) in &entries {
                if Some(id) == dragged_id.as_ref() {
                    // The dragged item is detached from normal flow and
                    // follows the pointer instead.
                    continue;
                }

                if preview_index == Some(visible_index) {
                    placeholder_gap(ui);
                }

                let rect = show_row(
                    ui,
                    id,
                    name,
                    *selected,
                    textures,
                    &mut toggled,
                    &mut delete_requested,
                    &mut drag_started,
                );
                view.rows
                    .push(RowBounds::new(id.clone(), rect.top(), rect.height()));
                visible_index += 1;
            }

            if preview_index == Some(visible_index) {
                placeholder_gap(ui);
            }
        });

    if let Some(id) = drag_started {
        drag.begin(collection, &id, Modality::Pointer);
    }

    // Pointer sessions are driven here; touch sessions are driven by the
    // gesture adapter from raw events.
    if drag.session().map(|s| s.modality) == Some(Modality::Pointer) {
        if ui.input(|i| i.pointer.any_released()) {
            let _ = drag.commit(collection);
            view.drag_pos = None;
        } else if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
            let _ = drag.preview(pos.y, &view.rows);
            view.drag_pos = Some(pos);
        } else {
            // Tracked pointer vanished without a release.
            drag.cancel();
            view.drag_pos = None;
        }
    }

    if let Some(session) = drag.session() {
        if let Some(pos) = view.drag_pos {
            show_detached_thumbnail(ui.ctx(), &session.source_id, pos, textures);
        }
    } else {
        view.drag_pos = None;
    }

    if let Some((id, selected)) = toggled {
        collection.toggle_select(&id, selected);
    }
    if let Some(id) = delete_requested {
        *confirm = Some(ConfirmDialog::new(
            DestructiveAction::DeleteOne(id),
            collection,
        ));
    }
}

#[allow(clippy::too_many_arguments)]
fn show_row(
    ui: &mut egui::Ui,
    id: &ImageId,
    name: &str,
    selected: bool,
    textures: &HashMap<ImageId, egui::TextureHandle>,
    toggled: &mut Option<(ImageId, bool)>,
    delete_requested: &mut Option<ImageId>,
    drag_started: &mut Option<ImageId>,
) -> egui::Rect {
    let response = ui
        .horizontal(|ui| {
            let handle = ui.label("☰");
            let handle_response = ui.interact(
                handle.rect,
                egui::Id::new(("deck-row-drag", id.as_str())),
                egui::Sense::drag(),
            );
            if handle_response.drag_started() {
                *drag_started = Some(id.clone());
            }

            let mut is_selected = selected;
            if ui.checkbox(&mut is_selected, "").changed() {
                *toggled = Some((id.clone(), is_selected));
            }

            match textures.get(id) {
                Some(texture) => {
                    ui.add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE)),
                    );
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(THUMB_SIZE, THUMB_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
                }
            }

            ui.label(name);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").clicked() {
                    *delete_requested = Some(id.clone());
                }
            });
        })
        .response;

    ui.separator();
    response.rect
}

/// Visual-only marker for where the dragged item would land if released
/// now; never part of the logical collection.
fn placeholder_gap(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), PLACEHOLDER_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(
        rect.shrink2(egui::vec2(2.0, 3.0)),
        2.0,
        ui.visuals().selection.bg_fill,
    );
}

fn show_detached_thumbnail(
    ctx: &egui::Context,
    id: &ImageId,
    pos: egui::Pos2,
    textures: &HashMap<ImageId, egui::TextureHandle>,
) {
    egui::Area::new(egui::Id::new("deck-dragged-item"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos + egui::vec2(12.0, -THUMB_SIZE / 2.0))
        .show(ctx, |ui| {
            match textures.get(id) {
                Some(texture) => {
                    ui.add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE)),
                    );
                }
                None => {
                    ui.label("🖼");
                }
            };
        });
}
