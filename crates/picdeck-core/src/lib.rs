mod collection;
mod drag;
mod types;

pub use collection::ImageCollection;
pub use drag::{DragReorderEngine, DragSession, Modality, RowBounds};
pub use types::*;
