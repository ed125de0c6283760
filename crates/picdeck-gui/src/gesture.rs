//! Touch-to-gesture translation.
//!
//! Touch devices have no native reordering primitive, so a drag session
//! is synthesized from raw touch tracking: a sustained single-finger hold
//! on a row becomes `begin`, moves become `preview`, release becomes
//! `commit`, and touch-cancel or a second finger becomes `cancel`. This
//! adapter only recognizes gestures; all reorder logic stays behind the
//! engine's four entry points, shared with the pointer modality.

use std::collections::BTreeSet;

use egui::{Event, Pos2, TouchPhase};
use picdeck_core::{DragReorderEngine, ImageCollection, Modality, RowBounds};

/// How long a single touch must rest on a row before it turns into a
/// drag, leaving quick taps free for scrolling and checkbox hits.
const HOLD_SECS: f64 = 0.25;

#[derive(Debug, Clone, Copy)]
struct PendingTouch {
    id: u64,
    pos: Pos2,
    started_at: f64,
}

#[derive(Debug, Default)]
pub struct GestureAdapter {
    /// All touch points currently down, tracked so multi-touch can be
    /// recognized even when the extra finger lands outside the list.
    active: BTreeSet<u64>,
    /// A touch that may still become a drag once the hold elapses.
    pending: Option<PendingTouch>,
    /// The touch id owning the live drag session, if any.
    tracked: Option<u64>,
    /// Last known position of the tracked touch, for rendering the
    /// detached thumbnail.
    pub last_pos: Option<Pos2>,
}

impl GestureAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of raw input events. `rows` are the rendered row
    /// bounds from the previous frame, in the same coordinate space as
    /// the touch positions.
    pub fn process(
        &mut self,
        events: &[Event],
        now: f64,
        rows: &[RowBounds],
        collection: &mut ImageCollection,
        engine: &mut DragReorderEngine,
    ) {
        for event in events {
            let Event::Touch { id, phase, pos, .. } = event else {
                continue;
            };
            let touch_id = id.0;
            match phase {
                TouchPhase::Start => {
                    self.active.insert(touch_id);
                    if self.active.len() > 1 {
                        // Reordering is a single-finger gesture only.
                        self.pending = None;
                        if self.tracked.take().is_some() {
                            engine.cancel();
                            self.last_pos = None;
                        }
                    } else if !engine.is_dragging() {
                        self.pending = Some(PendingTouch {
                            id: touch_id,
                            pos: *pos,
                            started_at: now,
                        });
                    }
                }
                TouchPhase::Move => {
                    if self.tracked == Some(touch_id) {
                        let _ = engine.preview(pos.y, rows);
                        self.last_pos = Some(*pos);
                    } else if let Some(pending) = &mut self.pending {
                        if pending.id == touch_id {
                            pending.pos = *pos;
                        }
                    }
                }
                TouchPhase::End => {
                    self.active.remove(&touch_id);
                    if self.tracked == Some(touch_id) {
                        let _ = engine.commit(collection);
                        self.tracked = None;
                        self.last_pos = None;
                    }
                    if self.pending.map(|p| p.id) == Some(touch_id) {
                        self.pending = None;
                    }
                }
                TouchPhase::Cancel => {
                    self.active.remove(&touch_id);
                    if self.tracked == Some(touch_id) {
                        engine.cancel();
                        self.tracked = None;
                        self.last_pos = None;
                    }
                    if self.pending.map(|p| p.id) == Some(touch_id) {
                        self.pending = None;
                    }
                }
            }
        }

        // Promote a sustained single-finger hold into a drag session.
        if let Some(pending) = self.pending {
            if now - pending.started_at >= HOLD_SECS && self.active.len() == 1 {
                self.pending = None;
                let hit = rows
                    .iter()
                    .find(|r| pending.pos.y >= r.top && pending.pos.y < r.top + r.height);
                if let Some(row) = hit {
                    if engine.begin(collection, &row.id, Modality::Touch) {
                        self.tracked = Some(pending.id);
                        self.last_pos = Some(pending.pos);
                    }
                }
            }
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{TouchDeviceId, TouchId, pos2};
    use picdeck_core::{ImageId, ImageRecord};

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

    fn rows(ids: &[ImageId]) -> Vec<RowBounds> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| RowBounds::new(id.clone(), i as f32 * 10.0, 10.0))
            .collect()
    }

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos: pos2(x, y),
            force: None,
        }
    }

    fn order(collection: &ImageCollection) -> Vec<String> {
        collection.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn hold_then_move_then_release_commits() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let rows = rows(&ids);
        let mut engine = DragReorderEngine::new();
        let mut adapter = GestureAdapter::new();

        // Finger lands on row "a" at t=0; nothing happens yet.
        adapter.process(
            &[touch(7, TouchPhase::Start, 5.0, 5.0)],
            0.0,
            &rows,
            &mut collection,
            &mut engine,
        );
        assert!(!engine.is_dragging());

        // Hold elapses: the session starts.
        adapter.process(&[], 0.3, &rows, &mut collection, &mut engine);
        assert!(engine.is_dragging());
        assert!(adapter.is_tracking());

        // Drag below the last row, then lift.
        adapter.process(
            &[touch(7, TouchPhase::Move, 5.0, 100.0)],
            0.4,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(
            &[touch(7, TouchPhase::End, 5.0, 100.0)],
            0.5,
            &rows,
            &mut collection,
            &mut engine,
        );

        assert_eq!(order(&collection), ["b", "c", "a"]);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn quick_tap_never_starts_a_session() {
        let (mut collection, ids) = deck(&["a", "b"]);
        let rows = rows(&ids);
        let mut engine = DragReorderEngine::new();
        let mut adapter = GestureAdapter::new();

        adapter.process(
            &[touch(1, TouchPhase::Start, 5.0, 5.0)],
            0.0,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(
            &[touch(1, TouchPhase::End, 5.0, 5.0)],
            0.1,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(&[], 0.5, &rows, &mut collection, &mut engine);

        assert!(!engine.is_dragging());
        assert_eq!(order(&collection), ["a", "b"]);
    }

    #[test]
    fn second_finger_cancels_the_session() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let rows = rows(&ids);
        let mut engine = DragReorderEngine::new();
        let mut adapter = GestureAdapter::new();

        adapter.process(
            &[touch(1, TouchPhase::Start, 5.0, 5.0)],
            0.0,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(&[], 0.3, &rows, &mut collection, &mut engine);
        adapter.process(
            &[touch(1, TouchPhase::Move, 5.0, 100.0)],
            0.4,
            &rows,
            &mut collection,
            &mut engine,
        );

        // Multi-touch: the gesture aborts and the order is untouched.
        adapter.process(
            &[touch(2, TouchPhase::Start, 50.0, 50.0)],
            0.5,
            &rows,
            &mut collection,
            &mut engine,
        );
        assert!(!engine.is_dragging());

        adapter.process(
            &[touch(1, TouchPhase::End, 5.0, 100.0)],
            0.6,
            &rows,
            &mut collection,
            &mut engine,
        );
        assert_eq!(order(&collection), ["a", "b", "c"]);
    }

    #[test]
    fn second_finger_blocks_session_entry() {
        let (mut collection, ids) = deck(&["a", "b"]);
        let rows = rows(&ids);
        let mut engine = DragReorderEngine::new();
        let mut adapter = GestureAdapter::new();

        adapter.process(
            &[
                touch(1, TouchPhase::Start, 5.0, 5.0),
                touch(2, TouchPhase::Start, 5.0, 15.0),
            ],
            0.0,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(&[], 1.0, &rows, &mut collection, &mut engine);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn touch_cancel_reverts_order() {
        let (mut collection, ids) = deck(&["a", "b", "c"]);
        let rows = rows(&ids);
        let mut engine = DragReorderEngine::new();
        let mut adapter = GestureAdapter::new();

        adapter.process(
            &[touch(1, TouchPhase::Start, 5.0, 5.0)],
            0.0,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(&[], 0.3, &rows, &mut collection, &mut engine);
        adapter.process(
            &[touch(1, TouchPhase::Move, 5.0, 100.0)],
            0.4,
            &rows,
            &mut collection,
            &mut engine,
        );
        adapter.process(
            &[touch(1, TouchPhase::Cancel, 5.0, 100.0)],
            0.5,
            &rows,
            &mut collection,
            &mut engine,
        );

        assert_eq!(order(&collection), ["a", "b", "c"]);
        assert!(!engine.is_dragging());
        assert!(!adapter.is_tracking());
    }
}
