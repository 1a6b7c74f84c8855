use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Failed to decode image '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CompressError>;

/// The outcome of one recompression run
#[derive(Debug, Clone)]
pub struct CompressionResult {
    /// Suggested output file name (input stem + `_imgcom.jpg`)
    pub name: String,
    /// Re-encoded JPEG bytes
    pub data: Vec<u8>,
    /// Size of the input file in bytes
    pub original_size: u64,
    /// Size of `data` in bytes
    pub compressed_size: u64,
}

impl CompressionResult {
    /// Size reduction as a rounded percentage of the original size.
    /// Negative when recompression grew the file.
    pub fn reduction_percent(&self) -> i32 {
        if self.original_size == 0 {
            return 0;
        }
        let original = self.original_size as f64;
        let compressed = self.compressed_size as f64;
        ((original - compressed) / original * 100.0).round() as i32
    }

    /// Bytes saved by recompression, zero when the file grew
    pub fn bytes_saved(&self) -> u64 {
        self.original_size.saturating_sub(self.compressed_size)
    }
}

/// Format a byte count for display: 1024-based units with up to two
/// decimals, trailing zeros trimmed ("1.5 KB", "2 MB", "0 Bytes").
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let rendered = format!("{:.2}", value);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exponent])
}
