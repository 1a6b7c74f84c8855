use eframe::egui;
use imgcom_assemble::calculate_statistics;
use imgcom_compress::format_size;

use super::state::ConvertState;

pub fn show(ui: &mut egui::Ui, state: &ConvertState) {
    egui::CollapsingHeader::new("📊 Statistics")
        .default_open(true)
        .show(ui, |ui| {
            match calculate_statistics(&state.store, &state.options) {
                Ok(stats) => {
                    ui.label(format!("Source images: {}", stats.source_images));
                    ui.label(format!("Output pages: {}", stats.output_pages));
                    ui.label(format!(
                        "Page size: {} × {} mm",
                        stats.page_width_mm, stats.page_height_mm
                    ));
                    ui.label(format!(
                        "Total input size: {}",
                        format_size(stats.total_input_bytes)
                    ));
                }
                Err(_) => {
                    ui.label("No statistics available");
                    ui.label("Add images to see statistics");
                }
            }
        });
}
