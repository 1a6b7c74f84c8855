//! Assembly statistics

use crate::options::AssemblyOptions;
use crate::store::ImageStore;
use crate::types::*;

/// Calculate statistics for an assembly of the given store's images
pub fn calculate_statistics<P>(
    store: &ImageStore<P>,
    options: &AssemblyOptions,
) -> Result<AssemblyStatistics> {
    if store.is_empty() {
        return Err(AssembleError::NoImages);
    }

    let (page_width_mm, page_height_mm) = options.page_dimensions_mm();

    Ok(AssemblyStatistics {
        source_images: store.len(),
        // One page per image, no padding or grouping
        output_pages: store.len(),
        total_input_bytes: store.total_size(),
        page_width_mm,
        page_height_mm,
    })
}
