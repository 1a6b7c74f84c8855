pub mod compress;
pub mod convert;

use imgcom_assemble::{AssembleError, ImageFile, Result};
use imgcom_async_runtime::{LoadedImage, PixelData};
use std::path::Path;

/// Longest edge of preview thumbnails, in pixels
pub(crate) const THUMBNAIL_EDGE: u32 = 256;

/// Read a file and decode it far enough for display: intrinsic size plus a
/// small RGBA thumbnail. The raw bytes are kept for later processing.
pub(crate) async fn load_source(path: impl AsRef<Path>) -> Result<LoadedImage> {
    let file = imgcom_assemble::load_image_file(path).await?;
    tokio::task::spawn_blocking(move || decode_preview(file)).await?
}

fn decode_preview(file: ImageFile) -> Result<LoadedImage> {
    use image::GenericImageView;

    let img = image::load_from_memory(&file.bytes).map_err(|source| AssembleError::Decode {
        name: file.name.clone(),
        source,
    })?;
    let (pixel_width, pixel_height) = img.dimensions();

    let thumb = img.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgba8();
    let (thumb_width, thumb_height) = thumb.dimensions();

    Ok(LoadedImage {
        file,
        pixel_width,
        pixel_height,
        preview: PixelData {
            width: thumb_width as usize,
            height: thumb_height as usize,
            rgba: thumb.into_raw(),
        },
    })
}
