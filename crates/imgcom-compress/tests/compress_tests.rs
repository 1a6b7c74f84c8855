use image::{ImageBuffer, Rgb};
use imgcom_compress::*;

/// Encode a solid-color PNG of the given pixel size
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgb([64u8, 128, 192]));
    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Encode a high-frequency PNG so quality changes actually change the size
fn noisy_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            (x * 7 % 256) as u8,
            (y * 13 % 256) as u8,
            ((x + y) * 29 % 256) as u8,
        ])
    });
    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_compress_outputs_jpeg() {
    let input = png_bytes(64, 48);

    let result = compress_sync("photo.png", &input, &CompressionOptions::default()).unwrap();

    // JPEG start-of-image marker
    assert_eq!(&result.data[..2], &[0xFF, 0xD8]);
    assert_eq!(result.name, "photo_imgcom.jpg");
    assert_eq!(result.original_size, input.len() as u64);
    assert_eq!(result.compressed_size, result.data.len() as u64);
}

#[test]
fn test_compressed_output_is_decodable_at_same_size() {
    let input = png_bytes(33, 21);

    let result = compress_sync("photo.png", &input, &CompressionOptions::default()).unwrap();

    let reloaded = image::load_from_memory(&result.data).unwrap();
    let rgb = reloaded.to_rgb8();
    assert_eq!(rgb.dimensions(), (33, 21));
}

#[test]
fn test_compress_rejects_out_of_range_quality() {
    let input = png_bytes(8, 8);

    for quality in [0.0, 0.05, 0.96, 1.0] {
        let result = compress_sync("photo.png", &input, &CompressionOptions { quality });
        match result {
            Err(CompressError::Config(_)) => {}
            _ => panic!("Expected Config error for quality {}", quality),
        }
    }
}

#[test]
fn test_compress_undecodable_input() {
    let result = compress_sync(
        "broken.png",
        b"definitely not an image",
        &CompressionOptions::default(),
    );

    match result {
        Err(CompressError::Decode { name, .. }) => assert_eq!(name, "broken.png"),
        _ => panic!("Expected Decode error"),
    }
}

#[test]
fn test_lower_quality_gives_smaller_output() {
    let input = noisy_png_bytes(128, 128);

    let high = compress_sync("noise.png", &input, &CompressionOptions { quality: 0.95 }).unwrap();
    let low = compress_sync("noise.png", &input, &CompressionOptions { quality: 0.1 }).unwrap();

    assert!(low.compressed_size < high.compressed_size);
}

#[test]
fn test_output_name_mapping() {
    assert_eq!(output_name("photo.png"), "photo_imgcom.jpg");
    assert_eq!(output_name("photo.JPEG"), "photo_imgcom.jpg");
    assert_eq!(output_name("archive.tar.gz"), "archive.tar_imgcom.jpg");
    assert_eq!(output_name("no_extension"), "no_extension_imgcom.jpg");
}

#[tokio::test]
async fn test_compress_file_round_trip() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("photo.png");
    std::fs::write(&input_path, png_bytes(32, 32)).unwrap();

    let result = compress_file(&input_path, &CompressionOptions::default())
        .await
        .unwrap();
    assert_eq!(result.name, "photo_imgcom.jpg");

    let output_path = temp_dir.path().join(&result.name);
    save_compressed(&result, &output_path).await.unwrap();

    let (width, height) = image::image_dimensions(&output_path).unwrap();
    assert_eq!((width, height), (32, 32));
}

#[tokio::test]
async fn test_compress_missing_file_is_io_error() {
    let result = compress_file("/nonexistent/missing.png", &CompressionOptions::default()).await;

    match result {
        Err(CompressError::Io(_)) => {}
        _ => panic!("Expected IO error"),
    }
}
