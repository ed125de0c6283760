use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("margins leave no printable area ({width_mm:.1} x {height_mm:.1} mm)")]
    InvalidMargins { width_mm: f32, height_mm: f32 },
    #[error("no images to export")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Page orientation, derived from the content rectangle rather than
/// chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Portrait dimensions in millimeters.
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (216.0, 279.0),
            PageSize::Legal => (216.0, 356.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
        }
    }
}

/// Page margins in centimeters, matching the configuration surface the
/// user fills in. Converted to millimeters when the content rectangle is
/// computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top_cm: f32,
    pub right_cm: f32,
    pub bottom_cm: f32,
    pub left_cm: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl Margins {
    /// Create uniform margins on all sides.
    pub fn uniform(margin_cm: f32) -> Self {
        Self {
            top_cm: margin_cm,
            right_cm: margin_cm,
            bottom_cm: margin_cm,
            left_cm: margin_cm,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        self.top_cm >= 0.0 && self.right_cm >= 0.0 && self.bottom_cm >= 0.0 && self.left_cm >= 0.0
    }
}
