use super::{field, hint};
use crate::{app::HsApp, theme};
use eframe::egui;

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Tracks");
    ui.label("Filter which streams get downloaded.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Select", None, |ui| {
        field(ui, "Video:", |ui| {
            theme::text_input(ui, &mut s.select_video, "e.g. best  or  res=\"3840*\":for=best");
        });
        field(ui, "Audio:", |ui| {
            theme::text_input(ui, &mut s.select_audio, "e.g. all  or  lang=en:for=best");
        });
        field(ui, "Subtitle:", |ui| {
            theme::text_input(ui, &mut s.select_subtitle, "e.g. name=\"English\":for=all");
        });
    });

    ui.add_space(12.0);

    theme::card(ui, "2. Drop", None, |ui| {
        field(ui, "Video:", |ui| {
            theme::text_input(ui, &mut s.drop_video, "Regex filter, same syntax as select");
        });
        field(ui, "Audio:", |ui| {
            theme::text_input(ui, &mut s.drop_audio, "");
        });
        field(ui, "Subtitle:", |ui| {
            theme::text_input(ui, &mut s.drop_subtitle, "");
        });
    });

    ui.add_space(12.0);

    theme::card(ui, "3. Playlist", None, |ui| {
        field(ui, "Ad keyword:", |ui| {
            theme::text_input(ui, &mut s.ad_keyword, "Regex matched against segment URLs");
        });
        field(ui, "URL processor:", |ui| {
            theme::text_input(ui, &mut s.urlprocessor_args, "Passed to the URL processor");
        });
        ui.checkbox(&mut s.append_url_params, "Append playlist query params to segments");
        ui.checkbox(&mut s.allow_hls_multi_ext_map, "Allow multiple #EXT-X-MAP");
        hint(ui, "Multiple filters are separated the way the downloader expects.");
    });
}
