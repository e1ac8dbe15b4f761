use super::{field, hint};
use crate::{app::HsApp, theme};
use eframe::egui;
use hs_core::{placeholder, DownloadSettings};

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Live");
    ui.label("Options that only apply to live streams.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Recording", None, |ui| {
        field(ui, "Record limit:", |ui| {
            theme::text_input(ui, &mut s.live_record_limit, placeholder::RECORD_LIMIT);
        });
        field(ui, "Refresh wait:", |ui| {
            theme::number_input(ui, &mut s.live_wait_time, DownloadSettings::LIVE_WAIT_RANGE, " s");
        });
        field(ui, "Start at:", |ui| {
            theme::text_input(ui, &mut s.task_start_at, placeholder::TASK_START_AT);
        });
        hint(ui, "The task waits until the given local time before starting.");
    });

    ui.add_space(12.0);

    theme::card(ui, "2. Segments", None, |ui| {
        field(ui, "First fetch count:", |ui| {
            ui.checkbox(&mut s.live_take_count_enabled, "");
            ui.add_enabled_ui(s.live_take_count_enabled, |ui| {
                theme::number_input(
                    ui,
                    &mut s.live_take_count,
                    DownloadSettings::LIVE_TAKE_RANGE,
                    " segments",
                );
            });
        });
        ui.checkbox(&mut s.live_perform_as_vod, "Download live stream as VOD");
        ui.checkbox(&mut s.live_keep_segments, "Keep segments when muxing in real time");
        ui.checkbox(&mut s.live_fix_vtt_by_audio, "Fix VTT subtitle timing from audio start");
    });
}
