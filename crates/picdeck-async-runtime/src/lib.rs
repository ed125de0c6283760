use std::path::PathBuf;

// Re-export types from library crates
pub use picdeck_core::{ImageId, ImageRecord};
pub use picdeck_export::ExportOptions;

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum DeckCommand {
    /// Ingest a batch of candidate files (already policy-filtered paths
    /// are fine too; the worker re-applies the image-type filter).
    LoadImages {
        paths: Vec<PathBuf>,
    },
    /// Export a snapshot of the deck. The worker never owns the live
    /// collection; it receives the order frozen at the moment the user
    /// asked.
    Export {
        records: Vec<ImageRecord>,
        options: ExportOptions,
        output_path: PathBuf,
    },
    SaveConfig {
        options: ExportOptions,
        path: PathBuf,
    },
    LoadConfig {
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum DeckUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    /// One image decoded and accepted, with a pre-rendered RGBA thumbnail
    /// for the deck view.
    ImageLoaded {
        record: ImageRecord,
        thumb_rgba: Vec<u8>,
        thumb_width: usize,
        thumb_height: usize,
    },
    ExportComplete {
        path: PathBuf,
        page_count: usize,
    },
    ConfigLoaded {
        options: ExportOptions,
    },
    Error {
        message: String,
    },
}
