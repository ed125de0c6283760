//! Confirmation port for destructive operations.
//!
//! The action is data, its effect lives in [`DestructiveAction::apply`],
//! and the yes/no answer comes from whatever asks the user — the egui
//! modal here, or a plain boolean in tests. Declining simply drops the
//! dialog without calling `apply`, so state is untouched.

use eframe::egui;
use picdeck_core::{ImageCollection, ImageId};

#[derive(Debug, Clone, PartialEq)]
pub enum DestructiveAction {
    DeleteOne(ImageId),
    DeleteSelected,
    DeleteAll,
}

impl DestructiveAction {
    pub fn prompt(&self, collection: &ImageCollection) -> String {
        match self {
            DestructiveAction::DeleteOne(_) => "Delete this image?".to_string(),
            DestructiveAction::DeleteSelected => {
                format!(
                    "Delete {} selected image(s)?",
                    collection.selected_count()
                )
            }
            DestructiveAction::DeleteAll => {
                format!("Delete all {} image(s)?", collection.len())
            }
        }
    }

    /// Perform the confirmed action; returns how many records were
    /// removed.
    pub fn apply(&self, collection: &mut ImageCollection) -> usize {
        match self {
            DestructiveAction::DeleteOne(id) => {
                usize::from(collection.remove_by_id(id).is_some())
            }
            DestructiveAction::DeleteSelected => collection.remove_selected(),
            DestructiveAction::DeleteAll => {
                let removed = collection.len();
                collection.clear();
                removed
            }
        }
    }
}

pub struct ConfirmDialog {
    pub action: DestructiveAction,
    prompt: String,
}

impl ConfirmDialog {
    pub fn new(action: DestructiveAction, collection: &ImageCollection) -> Self {
        let prompt = action.prompt(collection);
        Self { action, prompt }
    }

    /// Show the modal; `Some(answer)` once the user decides.
    pub fn show(&self, ctx: &egui::Context) -> Option<bool> {
        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&self.prompt);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picdeck_core::ImageRecord;

    fn deck(names: &[&str]) -> (ImageCollection, Vec<ImageId>) {
        let mut collection = ImageCollection::new();
        let mut ids = Vec::new();
        for name in names {
            let r = ImageRecord::new(*name, vec![0u8; 4]);
            ids.push(r.id.clone());
            collection.append(r).unwrap();
        }
        (collection, ids)
    }

    #[test]
    fn delete_selected_removes_only_selected() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        collection.toggle_select(&ids[0], true);
        collection.toggle_select(&ids[2], true);

        let removed = DestructiveAction::DeleteSelected.apply(&mut collection);
        assert_eq!(removed, 2);
        assert_eq!(collection.len(), 1);
        assert!(collection.contains(&ids[1]));
    }

    #[test]
    fn delete_all_empties_the_deck() {
        let (mut collection, _) = deck(&["a", "b"]);
        assert_eq!(DestructiveAction::DeleteAll.apply(&mut collection), 2);
        assert!(collection.is_empty());
    }

    #[test]
    fn delete_one_tolerates_absent_id() {
        let (mut collection, ids) = deck(&["a"]);
        let action = DestructiveAction::DeleteOne(ids[0].clone());
        assert_eq!(action.apply(&mut collection), 1);
        assert_eq!(action.apply(&mut collection), 0);
    }

    #[test]
    fn declining_leaves_state_unchanged() {
        let (mut collection, ids) = deck(&["a", "b"]);
        collection.toggle_select(&ids[0], true);
        let dialog = ConfirmDialog::new(DestructiveAction::DeleteSelected, &collection);

        // "No" means apply is never called; nothing else mutates state.
        let answer = false;
        if answer {
            dialog.action.apply(&mut collection);
        }
        assert_eq!(collection.len(), 2);
        assert!(collection.is_selected(&ids[0]));
    }
}
