//! Page placement calculations
//!
//! Computes where a source image lands on its output page: the largest
//! axis-aligned rectangle with the image's aspect ratio that fits inside
//! the page, centered in both directions.

/// An axis-aligned rectangle in page coordinates (points, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Calculate the centered, aspect-preserving placement of an image on a page.
///
/// The image is first scaled to the full page width; if the resulting height
/// would overflow the page, it is scaled to the full page height instead. The
/// result never exceeds the page in either dimension (letterbox, not cover).
pub fn fit_page(
    image_width: u32,
    image_height: u32,
    page_width: f32,
    page_height: f32,
) -> PlacementRect {
    let ratio = image_width as f32 / image_height as f32;

    // Width-first candidate, clamped to page height when too tall
    let mut width = page_width;
    let mut height = page_width / ratio;

    if height > page_height {
        height = page_height;
        width = page_height * ratio;
    }

    PlacementRect {
        x: (page_width - width) / 2.0,
        y: (page_height - height) / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_ratio_fills_page() {
        // 4:3 image on a 4:3 page covers it exactly
        let rect = fit_page(4000, 3000, 800.0, 600.0);

        assert!((rect.width - 800.0).abs() < 0.01);
        assert!((rect.height - 600.0).abs() < 0.01);
        assert!(rect.x.abs() < 0.01);
        assert!(rect.y.abs() < 0.01);
    }

    #[test]
    fn test_square_image_letterboxed() {
        // Square image on a wide page is height-limited and centered
        // horizontally with equal side margins
        let rect = fit_page(1000, 1000, 800.0, 600.0);

        assert!((rect.width - 600.0).abs() < 0.01);
        assert!((rect.height - 600.0).abs() < 0.01);
        assert!((rect.x - 100.0).abs() < 0.01);
        assert!(rect.y.abs() < 0.01);
    }

    #[test]
    fn test_wide_image_width_limited() {
        let rect = fit_page(2000, 500, 800.0, 600.0);

        assert!((rect.width - 800.0).abs() < 0.01);
        assert!((rect.height - 200.0).abs() < 0.01);
        assert!(rect.x.abs() < 0.01);
        assert!((rect.y - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_tall_image_height_limited() {
        let rect = fit_page(600, 1200, 800.0, 600.0);

        assert!((rect.width - 300.0).abs() < 0.01);
        assert!((rect.height - 600.0).abs() < 0.01);
        assert!((rect.x - 250.0).abs() < 0.01);
        assert!(rect.y.abs() < 0.01);
    }

    #[test]
    fn test_placement_never_exceeds_page() {
        let cases = [(4000, 3000), (1000, 1000), (30, 4000), (7919, 13), (1, 1)];
        for (w, h) in cases {
            let rect = fit_page(w, h, 595.3, 841.9);

            assert!(rect.width <= 595.3 + 0.01, "width overflow for {}x{}", w, h);
            assert!(rect.height <= 841.9 + 0.01, "height overflow for {}x{}", w, h);

            let source_ratio = w as f32 / h as f32;
            let placed_ratio = rect.width / rect.height;
            assert!(
                (source_ratio - placed_ratio).abs() / source_ratio < 0.001,
                "aspect ratio drifted for {}x{}",
                w,
                h
            );
        }
    }

    #[test]
    fn test_margins_are_symmetric() {
        let rect = fit_page(100, 100, 800.0, 600.0);

        let right_margin = 800.0 - rect.x - rect.width;
        let top_margin = 600.0 - rect.y - rect.height;
        assert!((rect.x - right_margin).abs() < 0.01);
        assert!((rect.y - top_margin).abs() < 0.01);
    }
}
