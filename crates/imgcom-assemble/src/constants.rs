//! Shared constants for image-to-PDF assembly
//!
//! This module centralizes magic numbers and constants used throughout
//! the assembly process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Image Embedding
// =============================================================================

/// JPEG quality used when re-encoding page images for embedding (0-100).
/// Fixed rather than user-selectable; the compressor covers chosen quality.
pub const EMBED_JPEG_QUALITY: u8 = 92;

// =============================================================================
// Output Defaults
// =============================================================================

/// Default file name for the assembled document
pub const DEFAULT_OUTPUT_NAME: &str = "imgcom_converted.pdf";
