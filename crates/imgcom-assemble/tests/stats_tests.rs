use imgcom_assemble::*;

fn store_with_sizes(sizes: &[usize]) -> ImageStore<()> {
    let mut store = ImageStore::new();
    for (i, len) in sizes.iter().enumerate() {
        store.add(
            ImageFile {
                name: format!("img{}.png", i),
                bytes: vec![0u8; *len],
            },
            None,
        );
    }
    store
}

#[test]
fn test_statistics_counts_and_sizes() {
    let store = store_with_sizes(&[100, 250, 50]);

    let stats = calculate_statistics(&store, &AssemblyOptions::default()).unwrap();

    assert_eq!(stats.source_images, 3);
    assert_eq!(stats.output_pages, 3);
    assert_eq!(stats.total_input_bytes, 400);
    assert_eq!(stats.page_width_mm, 210.0);
    assert_eq!(stats.page_height_mm, 297.0);
}

#[test]
fn test_statistics_empty_store_errors() {
    let store: ImageStore<()> = ImageStore::new();

    let result = calculate_statistics(&store, &AssemblyOptions::default());

    match result {
        Err(AssembleError::NoImages) => {}
        _ => panic!("Expected NoImages error"),
    }
}

#[test]
fn test_statistics_follow_orientation() {
    let store = store_with_sizes(&[10]);
    let options = AssemblyOptions {
        orientation: Orientation::Landscape,
        ..Default::default()
    };

    let stats = calculate_statistics(&store, &options).unwrap();

    assert_eq!(stats.page_width_mm, 297.0);
    assert_eq!(stats.page_height_mm, 210.0);
}

#[test]
fn test_statistics_track_store_edits() {
    let mut store = store_with_sizes(&[64, 64]);
    let ids: Vec<ImageId> = store.iter().map(|img| img.id()).collect();

    store.remove(ids[0]);
    let stats = calculate_statistics(&store, &AssemblyOptions::default()).unwrap();

    assert_eq!(stats.source_images, 1);
    assert_eq!(stats.total_input_bytes, 64);
}
