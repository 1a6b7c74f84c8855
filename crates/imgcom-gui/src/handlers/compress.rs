use imgcom_async_runtime::{ImgUpdate, PixelData};
use imgcom_compress::{CompressError, CompressionOptions, CompressionResult};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load_source(path: PathBuf, update_tx: &mpsc::UnboundedSender<ImgUpdate>) {
    match super::load_source(&path).await {
        Ok(image) => {
            let _ = update_tx.send(ImgUpdate::CompressSourceLoaded { image });
        }
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to load image: {e}"),
            });
        }
    }
}

pub async fn handle_run(
    name: String,
    bytes: Vec<u8>,
    options: CompressionOptions,
    update_tx: &mpsc::UnboundedSender<ImgUpdate>,
) {
    let _ = update_tx.send(ImgUpdate::Progress {
        operation: "Recompressing".to_string(),
        current: 1,
        total: 2,
    });

    let task = tokio::task::spawn_blocking(move || -> imgcom_compress::Result<_> {
        let result = imgcom_compress::compress_sync(&name, &bytes, &options)?;
        let preview = result_preview(&result)?;
        Ok((result, preview))
    });

    match task.await {
        Ok(Ok((result, preview))) => {
            let _ = update_tx.send(ImgUpdate::CompressComplete { result, preview });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to recompress image: {e}"),
            });
        }
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Recompression task failed: {e}"),
            });
        }
    }
}

/// Decode the freshly encoded JPEG back into a display thumbnail
fn result_preview(result: &CompressionResult) -> imgcom_compress::Result<PixelData> {
    let img = image::load_from_memory(&result.data).map_err(|source| CompressError::Decode {
        name: result.name.clone(),
        source,
    })?;
    let thumb = img
        .thumbnail(super::THUMBNAIL_EDGE, super::THUMBNAIL_EDGE)
        .to_rgba8();
    let (width, height) = thumb.dimensions();

    Ok(PixelData {
        width: width as usize,
        height: height as usize,
        rgba: thumb.into_raw(),
    })
}

pub async fn handle_save(data: Vec<u8>, path: PathBuf, update_tx: &mpsc::UnboundedSender<ImgUpdate>) {
    match tokio::fs::write(&path, &data).await {
        Ok(()) => {
            let _ = update_tx.send(ImgUpdate::CompressSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(ImgUpdate::Error {
                message: format!("Failed to save image: {e}"),
            });
        }
    }
}
