use eframe::egui;
use imgcom_assemble::{ImageStore, MoveDirection};

/// Builder for creating sliders with automatic change tracking
pub struct SliderBuilder<'a, T> {
    value: &'a mut T,
    range: std::ops::RangeInclusive<T>,
    text: String,
}

impl<'a, T> SliderBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T, range: std::ops::RangeInclusive<T>) -> Self {
        Self {
            value,
            range,
            text: String::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut slider =
            egui::Slider::new(self.value, self.range).clamping(egui::SliderClamping::Never);

        if !self.text.is_empty() {
            slider = slider.text(self.text);
        }

        ui.add(slider).changed()
    }
}

/// Builder for creating drag values with automatic formatting
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: Option<std::ops::RangeInclusive<T>>,
    suffix: Option<String>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T) -> Self {
        Self {
            value,
            range: None,
            suffix: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<T>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value);

        if let Some(range) = self.range {
            drag = drag.range(range);
        }

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        ui.add(drag).changed()
    }
}

/// Helper for creating labeled horizontal drag values with range and suffix
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        DragValueBuilder::new(value)
            .range(range)
            .suffix(suffix)
            .show(ui)
    })
    .inner
}

/// Labeled combo box for enum selection
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Horizontal button group for enum selection
pub fn button_group<T>(ui: &mut egui::Ui, value: &mut T, options: &[(T, &str)]) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        for (option_value, option_text) in options {
            if ui
                .selectable_value(value, option_value.clone(), *option_text)
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

/// Preview handle attached to each stored image: the uploaded thumbnail
/// texture plus the source pixel dimensions for captions
pub struct ImagePreview {
    pub texture: egui::TextureHandle,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Image list editor with thumbnails, reordering and removal
pub struct ImageListEditor<'a> {
    store: &'a mut ImageStore<ImagePreview>,
    changed: bool,
}

impl<'a> ImageListEditor<'a> {
    pub fn new(store: &'a mut ImageStore<ImagePreview>) -> Self {
        Self {
            store,
            changed: false,
        }
    }

    pub fn show(mut self, ui: &mut egui::Ui) -> bool {
        if self.store.is_empty() {
            ui.label("No images selected");
            return false;
        }

        let mut to_move = None;
        let mut to_remove = None;

        let count = self.store.len();
        for (idx, image) in self.store.iter().enumerate() {
            ui.horizontal(|ui| {
                if let Some(preview) = image.preview() {
                    let size = preview.texture.size_vec2();
                    let scale = 32.0 / size.x.max(size.y);
                    ui.image((preview.texture.id(), size * scale));
                }

                // Reorder buttons
                if idx > 0 && ui.small_button("▲").clicked() {
                    to_move = Some((image.id(), MoveDirection::Earlier));
                }
                if idx < count - 1 && ui.small_button("▼").clicked() {
                    to_move = Some((image.id(), MoveDirection::Later));
                }

                ui.label(format!("{}. {}", idx + 1, image.name()));

                if ui.small_button("✖").clicked() {
                    to_remove = Some(image.id());
                }
            });
        }

        // Apply changes
        if let Some((id, direction)) = to_move {
            self.store.move_image(id, direction);
            self.changed = true;
        }
        if let Some(id) = to_remove {
            self.store.remove(id);
            self.changed = true;
        }

        self.changed
    }
}
