mod ingest;
mod layout;
mod options;
mod pdf;
mod types;

pub use ingest::{filter_image_paths, is_image_path, load_image, load_images};
pub use layout::{PagePlacement, Rect, content_rect, layout_pages, orientation};
pub use options::ExportOptions;
pub use pdf::{export_pdf, probe_dimensions};
pub use types::*;
