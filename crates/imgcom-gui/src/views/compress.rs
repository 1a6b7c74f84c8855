use eframe::egui;
use imgcom_async_runtime::ImgCommand;
use imgcom_compress::{CompressionOptions, CompressionResult, MAX_QUALITY, MIN_QUALITY, format_size};
use tokio::sync::mpsc;

use crate::ui_components::SliderBuilder;

/// The loaded source image: file content plus its display thumbnail
pub struct SourcePreview {
    pub name: String,
    pub size_bytes: u64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub bytes: Vec<u8>,
    pub texture: egui::TextureHandle,
}

/// The latest recompression outcome plus its display thumbnail
pub struct ResultPreview {
    pub result: CompressionResult,
    pub texture: egui::TextureHandle,
}

pub struct CompressState {
    pub source: Option<SourcePreview>,
    pub options: CompressionOptions,
    pub result: Option<ResultPreview>,
    pub busy: bool,
}

impl Default for CompressState {
    fn default() -> Self {
        Self {
            source: None,
            options: CompressionOptions::default(),
            result: None,
            busy: false,
        }
    }
}

pub fn show_compress(
    ui: &mut egui::Ui,
    state: &mut CompressState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    egui::SidePanel::left("compress_controls")
        .min_width(300.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Image Compression");
                ui.separator();

                show_source_section(ui, state, command_tx);
                ui.add_space(10.0);
                ui.separator();

                show_quality_section(ui, state, command_tx);
                ui.add_space(10.0);
                ui.separator();

                show_result_section(ui, state);
                ui.add_space(10.0);
                ui.separator();

                show_actions_section(ui, state, command_tx);
            });
        });

    show_preview_area(ui, state);
}

fn show_source_section(
    ui: &mut egui::Ui,
    state: &mut CompressState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    ui.label("Image File:");
    if ui.button("Browse...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
            .pick_file()
        {
            log::info!("Loading image: {}", path.display());
            let _ = command_tx.send(ImgCommand::CompressLoadSource { path });
        }
    }

    if let Some(source) = &state.source {
        ui.add_space(5.0);
        ui.label(source.name.clone());
        ui.label(format!(
            "{} × {} px, {}",
            source.pixel_width,
            source.pixel_height,
            format_size(source.size_bytes)
        ));
    }
}

fn show_quality_section(
    ui: &mut egui::Ui,
    state: &mut CompressState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    ui.label("JPEG Quality:");
    let changed = SliderBuilder::new(&mut state.options.quality, MIN_QUALITY..=MAX_QUALITY)
        .text("Quality")
        .show(ui);
    ui.label(format!("Encoder quality: {}", state.options.jpeg_quality()));

    // Recompress live while the slider moves; the worker keeps only the
    // newest queued request
    if changed {
        run_compression(state, command_tx);
    }
}

fn show_result_section(ui: &mut egui::Ui, state: &CompressState) {
    ui.label("Result:");
    if let Some(preview) = &state.result {
        let result = &preview.result;
        ui.label(format!(
            "Original size: {}",
            format_size(result.original_size)
        ));
        ui.label(format!(
            "Compressed size: {}",
            format_size(result.compressed_size)
        ));
        ui.label(format!("Reduction: {}%", result.reduction_percent()));
        ui.label(format!("Saved: {}", format_size(result.bytes_saved())));
    } else {
        ui.label("No result yet");
    }
}

fn show_actions_section(
    ui: &mut egui::Ui,
    state: &mut CompressState,
    command_tx: &mpsc::UnboundedSender<ImgCommand>,
) {
    let can_compress = state.source.is_some() && !state.busy;
    if ui
        .add_enabled(can_compress, egui::Button::new("📉 Compress"))
        .clicked()
    {
        run_compression(state, command_tx);
    }

    ui.add_space(5.0);

    let can_save = state.result.is_some();
    if ui
        .add_enabled(can_save, egui::Button::new("💾 Save JPEG..."))
        .clicked()
    {
        if let Some(preview) = &state.result {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name(&preview.result.name)
                .save_file()
            {
                log::info!("Saving compressed image to: {}", path.display());
                let _ = command_tx.send(ImgCommand::CompressSave {
                    data: preview.result.data.clone(),
                    path,
                });
            }
        }
    }
}

fn run_compression(state: &mut CompressState, command_tx: &mpsc::UnboundedSender<ImgCommand>) {
    if let Some(source) = &state.source {
        state.busy = true;
        let _ = command_tx.send(ImgCommand::CompressRun {
            name: source.name.clone(),
            bytes: source.bytes.clone(),
            options: state.options.clone(),
        });
    }
}

fn show_preview_area(ui: &mut egui::Ui, state: &CompressState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        let Some(source) = &state.source else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("No Image");
                    ui.label("Select an image file to begin");
                });
            });
            return;
        };

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label("Original");
                ui.image(&source.texture);
                ui.label(format_size(source.size_bytes));
            });

            if let Some(preview) = &state.result {
                ui.separator();
                ui.vertical(|ui| {
                    ui.label("Compressed");
                    ui.image(&preview.texture);
                    ui.label(format!(
                        "{} ({}%)",
                        format_size(preview.result.compressed_size),
                        preview.result.reduction_percent()
                    ));
                });
            }
        });
    });
}
