//! Pure page-layout computation.
//!
//! Everything here is deterministic: the same page size, margins, and
//! image count always produce the same placement sequence.

use crate::types::{ExportError, Margins, Orientation, Result};

/// A rectangular area on the page, in millimeters, origin at the top-left
/// corner of the portrait page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Placement of one image on one output page.
///
/// Every placement of an export shares the same content rectangle: images
/// are stretched to exactly cover the printable area, disregarding their
/// native aspect ratio. That is the product's documented trade-off, not
/// an omission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// Index into the ordered image list handed to the layout.
    pub image_index: usize,
    pub content_rect: Rect,
    pub is_first_page: bool,
}

/// Printable area of the page after subtracting the margins (converted
/// from centimeters to millimeters). Fails when the margins consume the
/// whole page in either dimension.
pub fn content_rect(page_mm: (f32, f32), margins: &Margins) -> Result<Rect> {
    let (page_width, page_height) = page_mm;
    let top = margins.top_cm * 10.0;
    let right = margins.right_cm * 10.0;
    let bottom = margins.bottom_cm * 10.0;
    let left = margins.left_cm * 10.0;

    let width = page_width - left - right;
    let height = page_height - top - bottom;
    if width <= 0.0 || height <= 0.0 {
        return Err(ExportError::InvalidMargins {
            width_mm: width,
            height_mm: height,
        });
    }

    Ok(Rect::new(left, top, width, height))
}

/// Landscape when the printable area is wider than tall.
pub fn orientation(content: &Rect) -> Orientation {
    if content.width > content.height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}

/// One placement per image, in collection order.
pub fn layout_pages(image_count: usize, content: Rect) -> Vec<PagePlacement> {
    (0..image_count)
        .map(|image_index| PagePlacement {
            image_index,
            content_rect: content,
            is_first_page: image_index == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_rect_a4_uniform_1cm() {
        let rect = content_rect((210.0, 297.0), &Margins::uniform(1.0)).unwrap();
        assert_eq!(rect, Rect::new(10.0, 10.0, 190.0, 277.0));
    }

    #[test]
    fn content_rect_asymmetric_margins() {
        let margins = Margins {
            top_cm: 2.0,
            right_cm: 0.5,
            bottom_cm: 1.0,
            left_cm: 1.5,
        };
        let rect = content_rect((216.0, 279.0), &margins).unwrap();
        assert_eq!(rect, Rect::new(15.0, 20.0, 196.0, 249.0));
    }

    #[test]
    fn content_rect_rejects_exhausted_width() {
        let err = content_rect((210.0, 297.0), &Margins::uniform(10.5)).unwrap_err();
        assert!(matches!(err, ExportError::InvalidMargins { .. }));
    }

    #[test]
    fn content_rect_rejects_exhausted_height() {
        let margins = Margins {
            top_cm: 15.0,
            right_cm: 1.0,
            bottom_cm: 15.0,
            left_cm: 1.0,
        };
        let err = content_rect((210.0, 297.0), &margins).unwrap_err();
        assert!(matches!(err, ExportError::InvalidMargins { .. }));
    }

    #[test]
    fn orientation_is_derived_from_content() {
        assert_eq!(
            orientation(&Rect::new(0.0, 0.0, 190.0, 277.0)),
            Orientation::Portrait
        );
        assert_eq!(
            orientation(&Rect::new(0.0, 0.0, 200.0, 90.0)),
            Orientation::Landscape
        );
        // Square content stays portrait.
        assert_eq!(
            orientation(&Rect::new(0.0, 0.0, 100.0, 100.0)),
            Orientation::Portrait
        );
    }

    #[test]
    fn layout_is_deterministic_and_ordered() {
        let content = Rect::new(10.0, 10.0, 190.0, 277.0);
        let a = layout_pages(3, content);
        let b = layout_pages(3, content);
        assert_eq!(a, b);

        assert_eq!(a.len(), 3);
        for (i, placement) in a.iter().enumerate() {
            assert_eq!(placement.image_index, i);
            assert_eq!(placement.content_rect, content);
            assert_eq!(placement.is_first_page, i == 0);
        }
    }

    #[test]
    fn layout_of_empty_list_is_empty() {
        assert!(layout_pages(0, Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}
