use eframe::egui;
use imgcom_assemble::DEFAULT_OUTPUT_NAME;
use imgcom_async_runtime::ImgCommand;
use tokio::sync::mpsc;

use super::state::ConvertState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut ConvertState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            show_config_buttons(ui, state, command_tx);
        });

        ui.add_space(10.0);

        show_generate_button(ui, state, command_tx);
    });
}

fn show_config_buttons(
    ui: &mut egui::Ui,
    state: &ConvertState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    if ui.button("💾 Save Configuration").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("imgcom_config.json")
            .save_file()
        {
            let _ = command_tx.send(ImgCommand::ConvertSaveConfig {
                options: state.options.clone(),
                path,
            });
        }
    }

    if ui.button("📂 Load Configuration").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let _ = command_tx.send(ImgCommand::ConvertLoadConfig { path });
        }
    }
}

fn show_generate_button(
    ui: &mut egui::Ui,
    state: &mut ConvertState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    let can_generate = !state.store.is_empty() && !state.busy;

    if ui
        .add_enabled(can_generate, egui::Button::new("💾 Save PDF..."))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(DEFAULT_OUTPUT_NAME)
            .save_file()
        {
            log::info!(
                "Assembling {} images into {}",
                state.store.len(),
                path.display()
            );
            state.busy = true;
            let _ = command_tx.send(ImgCommand::ConvertGenerate {
                files: state.store.files(),
                options: state.options.clone(),
                output_path: path,
            });
        }
    }
}
