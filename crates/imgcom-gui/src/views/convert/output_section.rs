use eframe::egui;
use imgcom_assemble::{Orientation, PaperSize};

use super::state::ConvertState;
use crate::ui_components::{button_group, enum_selector, labeled_drag_clamped};

pub fn show(ui: &mut egui::Ui, state: &mut ConvertState) {
    egui::CollapsingHeader::new("📐 Page Setup")
        .default_open(true)
        .show(ui, |ui| {
            show_paper_size_selector(ui, &mut state.options.paper_size);
            ui.add_space(5.0);

            show_orientation_selector(ui, &mut state.options.orientation);
        });
}

/// Fieldless mirror of `PaperSize` so the combo box can match the current
/// selection regardless of the custom dimensions
#[derive(Clone, Copy, PartialEq)]
enum PaperChoice {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom,
}

fn show_paper_size_selector(ui: &mut egui::Ui, paper_size: &mut PaperSize) {
    let mut choice = match *paper_size {
        PaperSize::A3 => PaperChoice::A3,
        PaperSize::A4 => PaperChoice::A4,
        PaperSize::A5 => PaperChoice::A5,
        PaperSize::Letter => PaperChoice::Letter,
        PaperSize::Legal => PaperChoice::Legal,
        PaperSize::Tabloid => PaperChoice::Tabloid,
        PaperSize::Custom { .. } => PaperChoice::Custom,
    };

    let choices = [
        (PaperChoice::A3, "A3"),
        (PaperChoice::A4, "A4"),
        (PaperChoice::A5, "A5"),
        (PaperChoice::Letter, "Letter"),
        (PaperChoice::Legal, "Legal"),
        (PaperChoice::Tabloid, "Tabloid"),
        (PaperChoice::Custom, "Custom"),
    ];

    if enum_selector(ui, "paper_size", "Paper size:", &mut choice, &choices) {
        *paper_size = match choice {
            PaperChoice::A3 => PaperSize::A3,
            PaperChoice::A4 => PaperSize::A4,
            PaperChoice::A5 => PaperSize::A5,
            PaperChoice::Letter => PaperSize::Letter,
            PaperChoice::Legal => PaperSize::Legal,
            PaperChoice::Tabloid => PaperSize::Tabloid,
            PaperChoice::Custom => PaperSize::Custom {
                width_mm: 210.0,
                height_mm: 297.0,
            },
        };
    }

    if let PaperSize::Custom {
        width_mm,
        height_mm,
    } = paper_size
    {
        ui.add_space(5.0);
        labeled_drag_clamped(ui, "Width:", width_mm, 50.0..=2000.0, " mm");
        labeled_drag_clamped(ui, "Height:", height_mm, 50.0..=2000.0, " mm");
    }
}

fn show_orientation_selector(ui: &mut egui::Ui, orientation: &mut Orientation) {
    let orientations = [
        (Orientation::Portrait, "Portrait"),
        (Orientation::Landscape, "Landscape"),
    ];

    ui.label("Orientation:");
    button_group(ui, orientation, &orientations);
}
