use std::collections::HashSet;

use crate::types::{DeckError, ImageId, ImageRecord, Result};

/// The authoritative ordered sequence of images plus the selection set
/// over their ids.
///
/// Order is the export page order. The two structures are kept in sync by
/// construction: every mutation that removes a record also removes its
/// selection entry, so the selection is always a subset of the ids
/// present in the sequence.
#[derive(Debug, Default)]
pub struct ImageCollection {
    records: Vec<ImageRecord>,
    selected: HashSet<ImageId>,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn index_of(&self, id: &ImageId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    pub fn contains(&self, id: &ImageId) -> bool {
        self.index_of(id).is_some()
    }

    /// Snapshot of the current order, cheap to clone thanks to the shared
    /// image bytes. Used to hand a consistent deck to an export task.
    pub fn records(&self) -> Vec<ImageRecord> {
        self.records.clone()
    }

    /// Append a record at the end of the sequence.
    pub fn append(&mut self, record: ImageRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(DeckError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a record and its selection entry. Removing an absent id is a
    /// tolerated no-op, which keeps deletion idempotent.
    pub fn remove_by_id(&mut self, id: &ImageId) -> Option<ImageRecord> {
        let index = self.index_of(id)?;
        self.selected.remove(id);
        Some(self.records.remove(index))
    }

    /// Move a record to `target_index`, clamped to the valid insertion
    /// range. Moving a record to its own current index is a valid no-op.
    /// Returns the index the record ended up at.
    pub fn move_by_id(&mut self, id: &ImageId, target_index: usize) -> Result<usize> {
        let current = self
            .index_of(id)
            .ok_or_else(|| DeckError::NotFound(id.clone()))?;
        let record = self.records.remove(current);
        let target = target_index.min(self.records.len());
        self.records.insert(target, record);
        Ok(target)
    }

    pub fn is_selected(&self, id: &ImageId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids in collection order.
    pub fn selected_ids(&self) -> Vec<ImageId> {
        self.records
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .map(|r| r.id.clone())
            .collect()
    }

    /// Mark or unmark a single record. Silent no-op when the id is not in
    /// the collection, so the selection can never reference a ghost.
    pub fn toggle_select(&mut self, id: &ImageId, selected: bool) {
        if !self.contains(id) {
            return;
        }
        if selected {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.records.is_empty() && self.selected.len() == self.records.len()
    }

    /// Single toggle over the whole set: selects everything unless
    /// everything is already selected, in which case it clears the
    /// selection.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.records.iter().map(|r| r.id.clone()).collect();
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Remove every selected record; returns how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !self.selected.contains(&r.id));
        self.selected.clear();
        before - self.records.len()
    }

    /// Empty both structures.
    pub fn clear(&mut self) {
        self.records.clear();
        self.selected.clear();
    }
}
