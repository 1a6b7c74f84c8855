use std::path::PathBuf;

// Re-export types from library crates
pub use imgcom_assemble::{AssemblyOptions, AssemblyStatistics, ImageFile};
pub use imgcom_compress::{CompressionOptions, CompressionResult};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ImgCommand {
    ConvertLoadImages {
        paths: Vec<PathBuf>,
    },
    ConvertGenerate {
        files: Vec<ImageFile>,
        options: AssemblyOptions,
        output_path: PathBuf,
    },
    ConvertSaveConfig {
        options: AssemblyOptions,
        path: PathBuf,
    },
    ConvertLoadConfig {
        path: PathBuf,
    },
    CompressLoadSource {
        path: PathBuf,
    },
    CompressRun {
        name: String,
        bytes: Vec<u8>,
        options: CompressionOptions,
    },
    CompressSave {
        data: Vec<u8>,
        path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ImgUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    ConvertImagesLoaded {
        images: Vec<LoadedImage>,
    },
    ConvertComplete {
        path: PathBuf,
        page_count: usize,
    },
    ConvertConfigSaved {
        path: PathBuf,
    },
    ConvertConfigLoaded {
        options: AssemblyOptions,
    },
    CompressSourceLoaded {
        image: LoadedImage,
    },
    CompressComplete {
        result: CompressionResult,
        preview: PixelData,
    },
    CompressSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

/// A source image decoded far enough to display: the original file plus
/// its intrinsic size and a small RGBA preview
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub file: ImageFile,
    /// Intrinsic width in pixels
    pub pixel_width: u32,
    /// Intrinsic height in pixels
    pub pixel_height: u32,
    pub preview: PixelData,
}

/// Raw RGBA pixels ready to upload as a texture
#[derive(Debug, Clone)]
pub struct PixelData {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}
