use eframe::egui;
use imgcom_async_runtime::{ImgCommand, ImgUpdate, PixelData};
use imgcom_compress::format_size;
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::ui_components::ImagePreview;
use crate::views::compress::{ResultPreview, SourcePreview};
use crate::views::{CompressState, ConvertState, show_compress, show_convert};

/// File extensions accepted from drag-and-drop
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Default, PartialEq)]
enum Mode {
    #[default]
    Convert,
    Compress,
}

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct ImgcomApp {
    mode: Mode,
    status: String,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ImgCommand>,
    update_rx: mpsc::UnboundedReceiver<ImgUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    // Per-tool state
    convert: ConvertState,
    compress: CompressState,

    logger: AppLogger,

    // Runtime handle keeps the worker's runtime alive
    _tokio_handle: tokio::runtime::Handle,
}

impl ImgcomApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            mode: Mode::default(),
            status: String::new(),
            command_tx,
            update_rx,
            progress: None,
            convert: ConvertState::default(),
            compress: CompressState::default(),
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| {
                    path.extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                        .unwrap_or(false)
                })
                .collect()
        });

        if paths.is_empty() {
            return;
        }

        match self.mode {
            Mode::Convert => {
                if !self.convert.busy {
                    self.status = "Loading images...".to_string();
                    let _ = self
                        .command_tx
                        .send(ImgCommand::ConvertLoadImages { paths });
                }
            }
            Mode::Compress => {
                // Only one source image at a time; the first dropped wins
                if let Some(path) = paths.into_iter().next() {
                    self.status = "Loading image...".to_string();
                    let _ = self
                        .command_tx
                        .send(ImgCommand::CompressLoadSource { path });
                }
            }
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                ImgUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint(); // Request another frame
                }
                ImgUpdate::ConvertImagesLoaded { images } => {
                    let count = images.len();
                    for image in images {
                        let texture = pixel_texture(ctx, &image.file.name, &image.preview);
                        self.convert.store.add(
                            image.file,
                            Some(ImagePreview {
                                texture,
                                pixel_width: image.pixel_width,
                                pixel_height: image.pixel_height,
                            }),
                        );
                    }
                    log::info!("Added {} images", count);
                    self.status = format!("Added {} images", count);
                    self.progress = None;
                }
                ImgUpdate::ConvertComplete { path, page_count } => {
                    self.status = format!("Assembled {} pages → {}", page_count, path.display());
                    self.convert.busy = false;
                    self.progress = None;
                }
                ImgUpdate::ConvertConfigSaved { path } => {
                    self.status = format!("Configuration saved to {}", path.display());
                }
                ImgUpdate::ConvertConfigLoaded { options } => {
                    self.convert.options = options;
                    self.status = "Configuration loaded".to_string();
                }
                ImgUpdate::CompressSourceLoaded { image } => {
                    let texture = pixel_texture(ctx, &image.file.name, &image.preview);
                    self.status = format!("Loaded {}", image.file.name);
                    self.compress.source = Some(SourcePreview {
                        name: image.file.name.clone(),
                        size_bytes: image.file.bytes.len() as u64,
                        pixel_width: image.pixel_width,
                        pixel_height: image.pixel_height,
                        bytes: image.file.bytes,
                        texture,
                    });
                    self.compress.result = None;
                    self.progress = None;
                }
                ImgUpdate::CompressComplete { result, preview } => {
                    let texture = pixel_texture(ctx, &result.name, &preview);
                    self.status = format!(
                        "{} → {} ({}% reduction)",
                        format_size(result.original_size),
                        format_size(result.compressed_size),
                        result.reduction_percent()
                    );
                    self.compress.result = Some(ResultPreview { result, texture });
                    self.compress.busy = false;
                    self.progress = None;
                }
                ImgUpdate::CompressSaved { path } => {
                    self.status = format!("Saved → {}", path.display());
                    self.progress = None;
                }
                ImgUpdate::Error { message } => {
                    log::error!("{message}");
                    self.status = format!("Error: {message}");
                    self.convert.busy = false;
                    self.compress.busy = false;
                    self.progress = None;
                }
            }
        }
    }

    fn show_log_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log_panel").show(ctx, |ui| {
            egui::CollapsingHeader::new("📋 Log").show(ui, |ui| {
                if ui.small_button("Clear").clicked() {
                    self.logger.clear();
                }
                egui::ScrollArea::vertical()
                    .max_height(150.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            let color = match entry.level {
                                log::Level::Error => egui::Color32::RED,
                                log::Level::Warn => egui::Color32::YELLOW,
                                _ => ui.visuals().text_color(),
                            };
                            ui.colored_label(
                                color,
                                format!(
                                    "{} [{}] {}",
                                    entry.timestamp.format("%H:%M:%S"),
                                    entry.level,
                                    entry.message
                                ),
                            );
                        }
                    });
            });
        });
    }
}

/// Upload decoded RGBA pixels as an egui texture
fn pixel_texture(ctx: &egui::Context, name: &str, pixels: &PixelData) -> egui::TextureHandle {
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([pixels.width, pixels.height], &pixels.rgba);
    ctx.load_texture(name, color_image, egui::TextureOptions::default())
}

impl eframe::App for ImgcomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.process_updates(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Convert, "🖼 Convert to PDF");
                ui.selectable_value(&mut self.mode, Mode::Compress, "📉 Compress");
            });
        });

        self.show_log_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.mode {
                Mode::Convert => show_convert(ui, &mut self.convert, &self.command_tx),
                Mode::Compress => show_compress(ui, &mut self.compress, &self.command_tx),
            }

            // Show progress bar
            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint(); // Keep updating during operations
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
    }
}
