//! JPEG recompression
//!
//! Decodes any supported source format and re-encodes it as JPEG at the
//! requested quality. Alpha channels are flattened by the RGB conversion.

use crate::options::CompressionOptions;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;

/// Derive the suggested output file name: input stem plus `_imgcom.jpg`
pub fn output_name(input_name: &str) -> String {
    let stem = input_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(input_name);
    format!("{}_imgcom.jpg", stem)
}

/// Recompress a single image held in memory
pub fn compress_sync(
    name: &str,
    bytes: &[u8],
    options: &CompressionOptions,
) -> Result<CompressionResult> {
    options.validate()?;

    let img = image::load_from_memory(bytes).map_err(|source| CompressError::Decode {
        name: name.to_string(),
        source,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut data, options.jpeg_quality());
    encoder.encode(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;

    Ok(CompressionResult {
        name: output_name(name),
        original_size: bytes.len() as u64,
        compressed_size: data.len() as u64,
        data,
    })
}

/// Read and recompress an image file
pub async fn compress_file(
    path: impl AsRef<Path>,
    options: &CompressionOptions,
) -> Result<CompressionResult> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = tokio::fs::read(path).await?;

    let options = options.clone();
    tokio::task::spawn_blocking(move || compress_sync(&name, &bytes, &options)).await?
}

/// Write the recompressed bytes to a file
pub async fn save_compressed(result: &CompressionResult, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, &result.data).await?;
    Ok(())
}
