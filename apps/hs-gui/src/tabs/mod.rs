pub mod advanced;
pub mod decryption;
pub mod live;
pub mod options;
pub mod source;
pub mod tracks;

use eframe::egui;

const LABEL_WIDTH: f32 = 150.0;

/// One form row: fixed-width label column, then the control.
pub fn field<R>(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(LABEL_WIDTH, 28.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| ui.label(label),
        );
        add_contents(ui)
    })
    .inner
}

pub fn hint(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).small().weak());
}
