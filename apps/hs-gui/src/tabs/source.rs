use super::{field, hint};
use crate::{app::HsApp, theme, utils};
use eframe::egui;
use hs_core::{placeholder, DownloadSettings};

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Source");
    ui.label("Where the downloader lives and what it should fetch.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Tool Paths", None, |ui| {
        let current = s.executable.clone();
        field(ui, "Executable:", |ui| {
            theme::path_input(ui, &mut s.executable, "N_m3u8DL-RE", || {
                utils::pick_executable(&current)
            });
        });

        let current = s.work_dir.clone();
        field(ui, "Work directory:", |ui| {
            theme::path_input(ui, &mut s.work_dir, "Defaults to the executable's folder", || {
                utils::pick_folder(&current)
            });
        });

        let current = s.ffmpeg_path.clone();
        field(ui, "FFmpeg path:", |ui| {
            theme::path_input(ui, &mut s.ffmpeg_path, "ffmpeg executable (optional)", || {
                utils::pick_executable(&current)
            });
        });
    });

    ui.add_space(12.0);

    theme::card(ui, "2. Stream", None, |ui| {
        field(ui, "M3U8 URL:", |ui| {
            theme::text_input(ui, &mut s.m3u8_url, "http(s):// playlist or local file");
        });
        field(ui, "Title:", |ui| {
            theme::text_input(ui, &mut s.title, "Used as the output file name");
        });
        field(ui, "Headers:", |ui| {
            theme::text_input(ui, &mut s.headers, "Header1: Value1; Header2: Value2");
        });
        field(ui, "Base URL:", |ui| {
            theme::text_input(ui, &mut s.baseurl, "Resolves relative segment paths");
        });

        let current = s.mux_file.clone();
        field(ui, "Mux file:", |ui| {
            theme::path_input(ui, &mut s.mux_file, "Local file to mux in", || {
                utils::pick_media_file(&current)
            });
        });
    });

    ui.add_space(12.0);

    let (_, reset_clicked) = theme::card(
        ui,
        "3. Range",
        Some(("↺ Reset", theme::ButtonVariant::Secondary)),
        |ui| {
            field(ui, "Start time:", |ui| {
                theme::text_input(ui, &mut s.start_time, placeholder::RANGE_ZERO);
            });
            field(ui, "End time:", |ui| {
                theme::text_input(ui, &mut s.end_time, placeholder::RANGE_ZERO);
            });
            hint(ui, "Leave both at 00:00:00 to download everything.");
        },
    );

    if reset_clicked {
        let defaults = DownloadSettings::default();
        s.start_time = defaults.start_time;
        s.end_time = defaults.end_time;
    }
}
