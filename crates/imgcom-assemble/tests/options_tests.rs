use imgcom_assemble::*;

#[test]
fn test_default_options_are_valid() {
    assert!(AssemblyOptions::default().validate().is_ok());
}

#[test]
fn test_all_named_paper_sizes_are_valid() {
    let sizes = [
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
    ];
    for paper_size in sizes {
        let options = AssemblyOptions {
            paper_size,
            ..Default::default()
        };
        assert!(options.validate().is_ok(), "{:?} should be valid", paper_size);
    }
}

#[test]
fn test_zero_custom_dimension_rejected() {
    let options = AssemblyOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..Default::default()
    };

    match options.validate() {
        Err(AssembleError::Config(msg)) => assert!(msg.contains("positive")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_negative_custom_dimension_rejected() {
    let options = AssemblyOptions {
        paper_size: PaperSize::Custom {
            width_mm: 210.0,
            height_mm: -1.0,
        },
        ..Default::default()
    };

    assert!(options.validate().is_err());
}

#[test]
fn test_paper_dimension_table() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));

    let (w, h) = PaperSize::A4.dimensions_with_orientation(Orientation::Landscape);
    assert_eq!((w, h), (297.0, 210.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = AssemblyOptions {
        paper_size: PaperSize::Custom {
            width_mm: 200.0,
            height_mm: 300.0,
        },
        orientation: Orientation::Landscape,
    };

    let temp_file = NamedTempFile::new().unwrap();
    options.save(temp_file.path()).await.unwrap();

    let loaded = AssemblyOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"{ not json").unwrap();

    let result = AssemblyOptions::load(temp_file.path()).await;

    match result {
        Err(AssembleError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
