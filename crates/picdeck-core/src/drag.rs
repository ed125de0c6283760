use crate::collection::ImageCollection;
use crate::types::ImageId;

/// Which class of input produced the gesture. Both converge on the same
/// `begin`/`preview`/`commit`/`cancel` operations; only the event
/// translation in the UI layer differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Pointer,
    Touch,
}

/// Vertical extent of one rendered row, in the same coordinate space as
/// the pointer position handed to [`DragReorderEngine::preview`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowBounds {
    pub id: ImageId,
    pub top: f32,
    pub height: f32,
}

impl RowBounds {
    pub fn new(id: ImageId, top: f32, height: f32) -> Self {
        Self { id, top, height }
    }

    fn midpoint(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Ephemeral state of one reorder gesture, created on gesture start and
/// destroyed on commit or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub source_id: ImageId,
    pub source_index: usize,
    pub preview_index: usize,
    pub modality: Modality,
}

/// State machine turning pointer/touch input into a live insertion
/// preview and, on commit, a single move on the collection.
///
/// The engine is exclusive: at most one session exists at a time, and a
/// gesture start while one is active is ignored. The preview never
/// touches the collection; the only mutation the engine ever performs is
/// the `move_by_id` inside [`commit`](DragReorderEngine::commit).
#[derive(Debug, Default)]
pub struct DragReorderEngine {
    session: Option<DragSession>,
}

impl DragReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a gesture on `id`. Returns false (and changes nothing) when a
    /// session is already active or the id is not in the collection.
    pub fn begin(&mut self, collection: &ImageCollection, id: &ImageId, modality: Modality) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(source_index) = collection.index_of(id) else {
            return false;
        };
        self.session = Some(DragSession {
            source_id: id.clone(),
            source_index,
            preview_index: source_index,
            modality,
        });
        true
    }

    /// Recompute the live insertion index from the pointer's vertical
    /// position, using the nearest-above heuristic: the placeholder goes
    /// immediately before the first row (in list order) whose midpoint
    /// lies below the pointer, or at the end when no row qualifies. A
    /// pointer above every row therefore previews index 0.
    ///
    /// `rows` are the rendered rows in current order; the dragged item is
    /// skipped whether or not the caller already excluded it. The returned
    /// index is an insertion position in the list minus the dragged item,
    /// which is the index space `move_by_id` uses after removal.
    pub fn preview(&mut self, pointer_y: f32, rows: &[RowBounds]) -> Option<usize> {
        let session = self.session.as_mut()?;
        let mut index = 0;
        let mut target = None;
        for row in rows.iter().filter(|r| r.id != session.source_id) {
            if row.midpoint() > pointer_y {
                target = Some(index);
                break;
            }
            index += 1;
        }
        let preview = target.unwrap_or(index);
        session.preview_index = preview;
        Some(preview)
    }

    /// End the gesture, applying the previewed move when it differs from
    /// the source position. Returns the record's new index when a move
    /// happened.
    pub fn commit(&mut self, collection: &mut ImageCollection) -> Option<usize> {
        let session = self.session.take()?;
        if session.preview_index == session.source_index {
            return None;
        }
        collection
            .move_by_id(&session.source_id, session.preview_index)
            .ok()
    }

    /// End the gesture without mutating anything (touch-cancel or loss of
    /// the tracked pointer).
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRecord;

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

    fn order(collection: &ImageCollection) -> Vec<String> {
        collection.iter().map(|r| r.name.clone()).collect()
    }

    /// Rows of uniform height 10 starting at y = 0, in collection order.
    fn rows(ids: &[ImageId]) -> Vec<RowBounds> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| RowBounds::new(id.clone(), i as f32 * 10.0, 10.0))
            .collect()
    }

    #[test]
    fn commit_applies_previewed_move() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let mut engine = DragReorderEngine::new();

        assert!(engine.begin(&collection, &ids[0], Modality::Pointer));
        // Pointer below every remaining row: preview is the end of the list.
        let preview = engine.preview(100.0, &rows(&ids)).unwrap();
        assert_eq!(preview, 2);

        assert_eq!(engine.commit(&mut collection), Some(2));
        assert_eq!(order(&collection), ["b", "c", "a"]);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn cancel_reverts_to_pre_gesture_order() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let mut engine = DragReorderEngine::new();

        engine.begin(&collection, &ids[0], Modality::Touch);
        engine.preview(100.0, &rows(&ids));
        assert!(engine.cancel());

        assert_eq!(order(&collection), ["a", "b", "c"]);
        assert!(!engine.is_dragging());
        // Commit after cancel does nothing.
        assert_eq!(engine.commit(&mut collection), None);
    }

    #[test]
    fn commit_without_movement_is_noop() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let mut engine = DragReorderEngine::new();

        engine.begin(&collection, &ids[1], Modality::Pointer);
        // Pointer still over the source slot: row "c" (midpoint 25) is the
        // first remaining row below y=14, giving back the source index.
        let preview = engine.preview(14.0, &rows(&ids)).unwrap();
        assert_eq!(preview, 1);
        assert_eq!(engine.commit(&mut collection), None);
        assert_eq!(order(&collection), ["a", "b", "c"]);
    }

    #[test]
    fn pointer_above_all_rows_previews_head() {
        let (collection, ids) = deck(&["a", "b", "c"]);
        let mut engine = DragReorderEngine::new();

        engine.begin(&collection, &ids[2], Modality::Touch);
        let preview = engine.preview(-5.0, &rows(&ids)).unwrap();
        assert_eq!(preview, 0);
    }

    #[test]
    fn preview_tracks_pointer_between_rows() {
        let (collection, ids) = deck(&["a", "b", "c", "d"]);
        let mut engine = DragReorderEngine::new();

        engine.begin(&collection, &ids[0], Modality::Pointer);
        // Remaining rows b(mid 15), c(mid 25), d(mid 35).
        assert_eq!(engine.preview(20.0, &rows(&ids)), Some(1));
        assert_eq!(engine.preview(30.0, &rows(&ids)), Some(2));
        assert_eq!(engine.preview(10.0, &rows(&ids)), Some(0));
    }

    #[test]
    fn engine_is_exclusive() {
        let (collection, ids) = deck(&["a", "b"]);
        let mut engine = DragReorderEngine::new();

        assert!(engine.begin(&collection, &ids[0], Modality::Pointer));
        assert!(!engine.begin(&collection, &ids[1], Modality::Pointer));
        assert_eq!(engine.session().unwrap().source_id, ids[0]);
    }

    #[test]
    fn begin_on_unknown_id_is_refused() {
        let (mut collection, ids) = deck(&["a"]);
        collection.remove_by_id(&ids[0]);
        let mut engine = DragReorderEngine::new();
        assert!(!engine.begin(&collection, &ids[0], Modality::Pointer));
    }
}
