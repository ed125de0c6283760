pub mod export;
pub mod images;
