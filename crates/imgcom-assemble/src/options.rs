use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Assembly configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssemblyOptions {
    /// Output paper size
    pub paper_size: PaperSize,
    /// Output orientation
    pub orientation: Orientation,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl AssemblyOptions {
    /// Effective page dimensions in mm with orientation applied
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| AssembleError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AssembleError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.page_dimensions_mm();
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(AssembleError::Config(format!(
                "Page dimensions must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }
        if !width_mm.is_finite() || !height_mm.is_finite() {
            return Err(AssembleError::Config(
                "Page dimensions must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4_portrait() {
        let options = AssemblyOptions::default();

        assert_eq!(options.paper_size, PaperSize::A4);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.page_dimensions_mm(), (210.0, 297.0));
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        let options = AssemblyOptions {
            orientation: Orientation::Landscape,
            ..Default::default()
        };

        assert_eq!(options.page_dimensions_mm(), (297.0, 210.0));
    }
}
