use super::field;
use crate::{app::HsApp, theme, utils};
use eframe::egui;
use hs_core::{DecryptionEngine, HlsMethod};

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Decryption");
    ui.label("Keys and the engine used to decrypt protected segments.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Engine", None, |ui| {
        field(ui, "Engine:", |ui| {
            theme::enum_combo(ui, "decryption_engine", &mut s.decryption_engine, DecryptionEngine::ALL);
        });

        let current = s.decryption_binary_path.clone();
        field(ui, "Binary path:", |ui| {
            theme::path_input(ui, &mut s.decryption_binary_path, "Path to the decryption tool", || {
                utils::pick_executable(&current)
            });
        });
        ui.checkbox(&mut s.mp4_real_time_decryption, "Decrypt MP4 segments in real time");
    });

    ui.add_space(12.0);

    theme::card(ui, "2. Keys", None, |ui| {
        field(ui, "Key:", |ui| {
            theme::text_input(ui, &mut s.key, "KID:KEY  or  KEY");
        });

        let current = s.key_text_file.clone();
        field(ui, "Key file:", |ui| {
            theme::path_input(ui, &mut s.key_text_file, "Text file of KID:KEY lines", || {
                utils::pick_any_file(&current)
            });
        });
    });

    ui.add_space(12.0);

    theme::card(ui, "3. Custom HLS", None, |ui| {
        field(ui, "Method:", |ui| {
            theme::enum_combo(ui, "custom_hls_method", &mut s.custom_hls_method, HlsMethod::ALL);
        });
        field(ui, "Key:", |ui| {
            theme::text_input(ui, &mut s.custom_hls_key, "File path, HEX or Base64");
        });
        field(ui, "IV:", |ui| {
            theme::text_input(ui, &mut s.custom_hls_iv, "File path, HEX or Base64");
        });
    });
}
