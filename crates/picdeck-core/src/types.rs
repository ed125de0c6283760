use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("duplicate image id: {0}")]
    DuplicateId(ImageId),
    #[error("image not found: {0}")]
    NotFound(ImageId),
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Opaque identifier for an image in the deck.
///
/// Ids are minted from a millisecond timestamp plus a process-wide
/// counter, so two records can never share an id within one session.
/// `DeckError::DuplicateId` is still checked on insert and treated as an
/// internal invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

impl ImageId {
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        ImageId(format!("img-{millis:x}-{seq:x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded-and-accepted source image.
///
/// Immutable after creation; only its position in the collection changes.
/// The raw bytes are shared, so cloning a record (e.g. to hand the full
/// deck to an export task) is cheap.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: ImageId,
    pub name: String,
    pub data: Arc<[u8]>,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: ImageId::generate(),
            name: name.into(),
            data: data.into(),
        }
    }
}
