use crate::types::*;

/// Lowest selectable JPEG quality
pub const MIN_QUALITY: f32 = 0.1;
/// Highest selectable JPEG quality
pub const MAX_QUALITY: f32 = 0.95;
/// Default JPEG quality
pub const DEFAULT_QUALITY: f32 = 0.7;

/// Recompression configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionOptions {
    /// JPEG quality on the 0.0-1.0 scale, within `MIN_QUALITY..=MAX_QUALITY`
    pub quality: f32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

impl CompressionOptions {
    /// Quality on the 0-100 scale the JPEG encoder expects
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round() as u8
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(CompressError::Config(format!(
                "Quality must be between {} and {}, got {}",
                MIN_QUALITY, MAX_QUALITY, self.quality
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quality() {
        let options = CompressionOptions::default();
        assert_eq!(options.quality, 0.7);
        assert_eq!(options.jpeg_quality(), 70);
    }

    #[test]
    fn test_quality_scale_conversion() {
        assert_eq!(CompressionOptions { quality: 0.1 }.jpeg_quality(), 10);
        assert_eq!(CompressionOptions { quality: 0.95 }.jpeg_quality(), 95);
        assert_eq!(CompressionOptions { quality: 0.333 }.jpeg_quality(), 33);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(CompressionOptions { quality: 0.1 }.validate().is_ok());
        assert!(CompressionOptions { quality: 0.95 }.validate().is_ok());
        assert!(CompressionOptions { quality: 0.05 }.validate().is_err());
        assert!(CompressionOptions { quality: 1.0 }.validate().is_err());
    }
}
