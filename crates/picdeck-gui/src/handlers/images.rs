use std::path::PathBuf;
use std::sync::Arc;

use picdeck_async_runtime::DeckUpdate;
use picdeck_core::ImageRecord;
use picdeck_export::ExportError;
use tokio::sync::mpsc;

/// Ingest a batch of candidate files: apply the image-type policy, then
/// load and thumbnail the accepted ones one at a time, in the order the
/// user supplied.
pub async fn handle_load(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<DeckUpdate>) {
    let accepted = match picdeck_export::filter_image_paths(&paths) {
        Ok(accepted) => accepted,
        Err(_) => {
            let _ = update_tx.send(DeckUpdate::Error {
                message: "Please select image files only.".to_string(),
            });
            return;
        }
    };

    let skipped = paths.len() - accepted.len();
    if skipped > 0 {
        log::info!("Skipping {skipped} non-image file(s)");
    }

    let total = accepted.len();
    for (i, path) in accepted.iter().enumerate() {
        let _ = update_tx.send(DeckUpdate::Progress {
            operation: format!("Loading {}", path.display()),
            current: i,
            total,
        });

        let record = match picdeck_export::load_image(path).await {
            Ok(record) => record,
            Err(e) => {
                let _ = update_tx.send(DeckUpdate::Error {
                    message: format!("Failed to read {}: {e}", path.display()),
                });
                continue;
            }
        };

        match make_thumbnail(&record).await {
            Ok((thumb_rgba, thumb_width, thumb_height)) => {
                let _ = update_tx.send(DeckUpdate::ImageLoaded {
                    record,
                    thumb_rgba,
                    thumb_width,
                    thumb_height,
                });
            }
            Err(e) => {
                let _ = update_tx.send(DeckUpdate::Error {
                    message: format!("Failed to decode {}: {e}", record.name),
                });
            }
        }
    }

    let _ = update_tx.send(DeckUpdate::Progress {
        operation: "Loading images".to_string(),
        current: total,
        total,
    });
}

const THUMB_MAX_PX: u32 = 192;

async fn make_thumbnail(record: &ImageRecord) -> Result<(Vec<u8>, usize, usize), ExportError> {
    let data = Arc::clone(&record.data);
    let thumb = tokio::task::spawn_blocking(move || {
        let decoded = image::load_from_memory(&data)?;
        let thumb = decoded.thumbnail(THUMB_MAX_PX, THUMB_MAX_PX).to_rgba8();
        let (width, height) = thumb.dimensions();
        Ok::<_, ExportError>((thumb.into_raw(), width as usize, height as usize))
    })
    .await??;
    Ok(thumb)
}
