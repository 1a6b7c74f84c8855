use eframe::egui;
use imgcom_async_runtime::ImgCommand;
use tokio::sync::mpsc;

use super::state::ConvertState;
use crate::ui_components::ImageListEditor;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut ConvertState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    egui::CollapsingHeader::new("🖼 Input Images")
        .default_open(true)
        .show(ui, |ui| {
            ui.add_enabled_ui(!state.busy, |ui| {
                if ui.button("➕ Add Images").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                        .pick_files()
                    {
                        log::info!("Loading {} images", paths.len());
                        let _ = command_tx.send(ImgCommand::ConvertLoadImages { paths });
                    }
                }

                ui.add_space(5.0);

                ImageListEditor::new(&mut state.store).show(ui);

                if !state.store.is_empty() {
                    ui.add_space(5.0);
                    if ui.small_button("Clear all").clicked() {
                        state.store.clear();
                    }
                }
            });
        });
}
