use super::field;
use crate::{app::HsApp, theme, utils};
use eframe::egui;
use hs_core::DownloadSettings;

pub fn show(app: &mut HsApp, ui: &mut egui::Ui) {
    ui.heading("Download");
    ui.label("Merging behaviour, throughput and output files.");
    ui.add_space(12.0);

    let s = &mut app.settings;

    theme::card(ui, "1. Switches", None, |ui| {
        egui::Grid::new("switch_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.checkbox(&mut s.del_after_merge, "Delete segments after merge");
                ui.checkbox(&mut s.auto_select, "Auto-select best tracks");
                ui.end_row();

                ui.checkbox(&mut s.merge_to_mp4, "Mux into MP4");
                ui.checkbox(&mut s.binary_merge, "Binary merge");
                ui.end_row();

                ui.checkbox(&mut s.concurrent_download, "Download tracks concurrently");
                ui.checkbox(&mut s.check_segments_count, "Verify segment count");
                ui.end_row();

                ui.checkbox(&mut s.only_parse_m3u8, "Parse playlist only (skip download)");
                ui.checkbox(&mut s.mux_while_download, "Mux while downloading (live)");
                ui.end_row();

                ui.checkbox(&mut s.no_merge, "Do not merge after download");
                ui.checkbox(&mut s.no_date_in_name, "No date info when muxing");
                ui.end_row();
            });
    });

    ui.add_space(12.0);

    let (_, reset_clicked) = theme::card(
        ui,
        "2. Performance",
        Some(("↺ Reset", theme::ButtonVariant::Secondary)),
        |ui| {
            field(ui, "Threads:", |ui| {
                theme::number_input(ui, &mut s.max_threads, DownloadSettings::THREADS_RANGE, "");
            });
            field(ui, "Retries:", |ui| {
                theme::number_input(ui, &mut s.retry_count, DownloadSettings::RETRY_RANGE, "");
            });
            field(ui, "Timeout:", |ui| {
                theme::number_input(ui, &mut s.timeout, DownloadSettings::TIMEOUT_RANGE, " s");
            });
            field(ui, "Speed limit:", |ui| {
                theme::number_input(ui, &mut s.limit_speed, DownloadSettings::SPEED_RANGE, " KB/s");
                if s.limit_speed == 0 {
                    ui.label(egui::RichText::new("unlimited").small().weak());
                }
            });
        },
    );

    if reset_clicked {
        let d = DownloadSettings::default();
        s.max_threads = d.max_threads;
        s.retry_count = d.retry_count;
        s.timeout = d.timeout;
        s.limit_speed = d.limit_speed;
    }

    ui.add_space(12.0);

    theme::card(ui, "3. Output", None, |ui| {
        let current = s.tmp_dir.clone();
        field(ui, "Temp directory:", |ui| {
            theme::path_input(ui, &mut s.tmp_dir, "Where segments are staged", || {
                utils::pick_folder(&current)
            });
        });
        field(ui, "Name pattern:", |ui| {
            theme::text_input(ui, &mut s.save_pattern, "<SaveName>_<Resolution>_<Bandwidth>");
        });

        let current = s.log_file_path.clone();
        field(ui, "Log file:", |ui| {
            theme::path_input(ui, &mut s.log_file_path, "Downloader's own log file", || {
                utils::pick_log_file(&current)
            });
        });
    });
}
