mod actions_section;
mod input_section;
mod output_section;
mod state;
mod statistics_section;

pub use state::ConvertState;

use eframe::egui;
use imgcom_async_runtime::ImgCommand;
use tokio::sync::mpsc;

pub fn show_convert(
    ui: &mut egui::Ui,
    state: &mut ConvertState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    egui::SidePanel::left("convert_controls")
        .min_width(300.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Image to PDF");
                ui.separator();

                input_section::show(ui, state, command_tx);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                output_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                statistics_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx);
            });
        });

    show_preview_area(ui, state);
}

fn show_preview_area(ui: &mut egui::Ui, state: &ConvertState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        if state.store.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("No Images");
                    ui.label("Add image files to begin");
                });
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (idx, image) in state.store.iter().enumerate() {
                    ui.vertical(|ui| {
                        if let Some(preview) = image.preview() {
                            let size = preview.texture.size_vec2();
                            let scale = (160.0 / size.x.max(size.y)).min(1.0);
                            ui.image((preview.texture.id(), size * scale));
                            ui.label(format!("{}. {}", idx + 1, image.name()));
                            ui.label(format!(
                                "{} × {} px",
                                preview.pixel_width, preview.pixel_height
                            ));
                        } else {
                            ui.label(format!("{}. {}", idx + 1, image.name()));
                        }
                    });
                }
            });
        });
    });
}
