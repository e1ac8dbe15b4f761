use super::{field, hint};
use crate::{app::HsApp, theme};
use eframe::egui;
use hs_core::{LogLevel, SubFormat, UiLanguage};

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Advanced");
    ui.label("Subtitles, networking and downloader console behaviour.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Subtitles", None, |ui| {
        field(ui, "Format:", |ui| {
            theme::enum_combo(ui, "sub_format", &mut s.sub_format, SubFormat::ALL);
        });
        ui.checkbox(&mut s.sub_only, "Subtitles only");
        ui.checkbox(&mut s.auto_subtitle_fix, "Fix subtitles automatically");
    });

    ui.add_space(12.0);

    theme::card(ui, "2. Network", None, |ui| {
        field(ui, "Proxy:", |ui| {
            theme::text_input(ui, &mut s.custom_proxy, "http://127.0.0.1:8888");
        });
        ui.checkbox(&mut s.no_system_proxy, "Ignore the system proxy");
    });

    ui.add_space(12.0);

    theme::card(ui, "3. Console", None, |ui| {
        field(ui, "Log level:", |ui| {
            theme::enum_combo(ui, "log_level", &mut s.log_level, LogLevel::ALL);
        });
        field(ui, "UI language:", |ui| {
            theme::enum_combo(ui, "ui_language", &mut s.ui_language, UiLanguage::ALL);
        });

        egui::Grid::new("console_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.checkbox(&mut s.force_ansi_console, "Force ANSI console");
                ui.checkbox(&mut s.no_ansi_color, "No ANSI colors");
                ui.end_row();

                ui.checkbox(&mut s.no_log, "Disable downloader log file");
                ui.checkbox(&mut s.disable_update_check, "Skip update check");
                ui.end_row();

                ui.checkbox(&mut s.use_ffmpeg_concat_demuxer, "FFmpeg concat demuxer");
                ui.checkbox(&mut s.write_meta_json, "Write meta JSON");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    theme::card(ui, "4. Custom Arguments", None, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut s.args)
                .hint_text("--some-flag value")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        hint(ui, "Split on whitespace and appended after the generated options.");
    });
}
