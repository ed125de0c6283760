use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use picdeck_core::ImageRecord;
use printpdf::*;

use crate::layout::{self, PagePlacement};
use crate::options::ExportOptions;
use crate::types::{ExportError, Orientation, Result};

/// Natural pixel dimensions of an image, read from the encoded header.
///
/// Decoding is CPU-bound, so it runs on the blocking pool. Export calls
/// this strictly one image at a time; any failure aborts the whole export
/// before a document is written.
pub async fn probe_dimensions(record: &ImageRecord) -> Result<(u32, u32)> {
    let data = Arc::clone(&record.data);
    let dims = tokio::task::spawn_blocking(move || {
        let reader = ::image::ImageReader::new(Cursor::new(&data[..])).with_guessed_format()?;
        Ok::<_, ExportError>(reader.into_dimensions()?)
    })
    .await??;
    Ok(dims)
}

/// Export the ordered images as a paginated PDF, one stretched image per
/// page. Returns the page count. The image collection itself is never
/// mutated by export.
pub async fn export_pdf(
    records: &[ImageRecord],
    options: &ExportOptions,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    if records.is_empty() {
        return Err(ExportError::NoImages);
    }
    options.validate()?;

    let page_mm = options.page_size.dimensions_mm();
    let content = layout::content_rect(page_mm, &options.margins)?;
    let placements = layout::layout_pages(records.len(), content);

    // Sequential per-image preparation: each probe completes before the
    // next begins, and a failure aborts with no output produced.
    let mut dimensions = Vec::with_capacity(records.len());
    for record in records {
        dimensions.push(probe_dimensions(record).await?);
    }

    let page_count = placements.len();
    let records = records.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || {
        build_pdf_bytes(&records, &dimensions, &placements, &options)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(page_count)
}

fn build_pdf_bytes(
    records: &[ImageRecord],
    dimensions: &[(u32, u32)],
    placements: &[PagePlacement],
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("picdeck");

    let (portrait_w, portrait_h) = options.page_size.dimensions_mm();
    let content = placements
        .first()
        .map(|p| p.content_rect)
        .unwrap_or_default();

    // The content rect is computed against the portrait page; when it
    // comes out wider than tall the media box is emitted landscape.
    let (page_w_mm, page_h_mm) = match layout::orientation(&content) {
        Orientation::Portrait => (portrait_w, portrait_h),
        Orientation::Landscape => (portrait_h, portrait_w),
    };

    for placement in placements {
        let record = &records[placement.image_index];
        let (px_width, px_height) = dimensions[placement.image_index];

        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&record.data, &mut warnings)
            .map_err(|e| ExportError::Pdf(format!("{}: {}", record.name, e)))?;
        let image_id = doc.add_image(&raw);

        let rect = placement.content_rect;
        // PDF origin is bottom-left; the layout rect's y is the top margin.
        let y_bottom_mm = page_h_mm - rect.y - rect.height;
        let target_w_pt = Mm(rect.width).into_pt().0;
        let target_h_pt = Mm(rect.height).into_pt().0;

        // At 72 dpi one pixel is one point, so the stretch-fill scale is
        // simply target size over pixel size per axis.
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(rect.x).into_pt()),
                translate_y: Some(Mm(y_bottom_mm).into_pt()),
                rotate: None,
                scale_x: Some(target_w_pt / px_width.max(1) as f32),
                scale_y: Some(target_h_pt / px_height.max(1) as f32),
                dpi: Some(72.0),
            },
        }];

        doc.pages
            .push(PdfPage::new(Mm(page_w_mm), Mm(page_h_mm), ops));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Margins;

    fn png_record(name: &str, width: u32, height: u32) -> ImageRecord {
        let pixel = ::image::Rgba([120u8, 40, 40, 255]);
        let buffer = ::image::ImageBuffer::from_pixel(width, height, pixel);
        let mut bytes = Vec::new();
        ::image::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut Cursor::new(&mut bytes), ::image::ImageFormat::Png)
            .unwrap();
        ImageRecord::new(name, bytes)
    }

    #[tokio::test]
    async fn empty_export_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        let err = export_pdf(&[], &ExportOptions::default(), &path)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::NoImages));
        assert!(!path.exists(), "no document may be produced");
    }

    #[tokio::test]
    async fn invalid_margins_refused_before_any_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let records = vec![png_record("a.png", 2, 2)];
        let options = ExportOptions {
            margins: Margins::uniform(20.0),
            ..Default::default()
        };

        let err = export_pdf(&records, &options, &path).await.unwrap_err();
        assert!(matches!(err, ExportError::InvalidMargins { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn undecodable_image_aborts_whole_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let records = vec![
            png_record("a.png", 2, 2),
            ImageRecord::new("broken.png", b"not an image".to_vec()),
        ];

        let result = export_pdf(&records, &ExportOptions::default(), &path).await;
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn exports_one_page_per_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pdf");
        let records = vec![
            png_record("a.png", 4, 2),
            png_record("b.png", 2, 4),
            png_record("c.png", 3, 3),
        ];

        let pages = export_pdf(&records, &ExportOptions::default(), &path)
            .await
            .unwrap();
        assert_eq!(pages, 3);

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn probe_reports_natural_dimensions() {
        let record = png_record("a.png", 7, 5);
        assert_eq!(probe_dimensions(&record).await.unwrap(), (7, 5));
    }
}
