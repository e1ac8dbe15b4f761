use crate::{tabs, theme, utils};
use eframe::egui;
use hs_core::DownloadSettings;
use hs_factory::command::{build_command, preflight, resolve_work_dir, PreflightError};
use hs_factory::downloader::{run_async, DownloadHandle, DownloadJob, DownloadStatus, ExitOutcome};
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;
use tracing::{info, warn};

/// Oldest lines are dropped past this point.
pub const MAX_LOG_LINES: usize = 5000;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tab {
    Source,
    Options,
    Live,
    Tracks,
    Decryption,
    Advanced,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Source,
        Tab::Options,
        Tab::Live,
        Tab::Tracks,
        Tab::Decryption,
        Tab::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Source => "🔗  Source",
            Tab::Options => "⬇  Download",
            Tab::Live => "📡  Live",
            Tab::Tracks => "🎞  Tracks",
            Tab::Decryption => "🔑  Decryption",
            Tab::Advanced => "⚙  Advanced",
        }
    }
}

/// Modal message box, closed with its OK button.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            is_error: false,
        }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            is_error: true,
        }
    }
}

fn preflight_message(err: &PreflightError) -> &'static str {
    match err {
        PreflightError::MissingExecutable(_) => "Executable does not exist!",
        PreflightError::MissingUrl => "Please enter an M3U8 URL!",
    }
}

pub struct HsApp {
    pub current_tab: Tab,
    pub theme_preference: theme::Theme,
    pub settings: DownloadSettings,

    pub logs: Vec<String>,
    pub status_rx: Receiver<DownloadStatus>,
    pub status_tx: Sender<DownloadStatus>,

    pub job: Option<DownloadHandle>,
    pub progress: u8,
    pub current_task: String,
    pub command_preview: String,
    pub notice: Option<Notice>,

    // Window level last sent to the viewport
    applied_on_top: Option<bool>,
}

impl Default for HsApp {
    fn default() -> Self {
        Self::new(DownloadSettings::default())
    }
}

impl HsApp {
    pub fn new(settings: DownloadSettings) -> Self {
        let (tx, rx) = channel::<DownloadStatus>();

        Self {
            current_tab: Tab::Source,
            theme_preference: theme::Theme::Dark,
            settings,

            logs: vec!["Ready.".into()],
            status_rx: rx,
            status_tx: tx,

            job: None,
            progress: 0,
            current_task: "Idle".into(),
            command_preview: String::new(),
            notice: None,

            applied_on_top: None,
        }
    }

    /// Starts from the previous session's settings when they can be read.
    pub fn restore() -> Self {
        match hs_core::load_last() {
            Some(settings) => {
                let mut app = Self::new(settings);
                app.log("Loaded previous settings");
                app
            }
            None => Self::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
        if self.logs.len() > MAX_LOG_LINES {
            let excess = self.logs.len() - MAX_LOG_LINES;
            self.logs.drain(..excess);
        }
    }

    pub fn clear_log(&mut self) {
        self.logs.clear();
        self.log("Log cleared");
    }

    pub fn generate_command(&mut self) {
        self.settings.normalize();
        self.command_preview = build_command(&self.settings).to_string();
        self.log("Command generated, ready to copy");
    }

    pub fn start_download(&mut self) {
        if self.is_busy() {
            return;
        }
        self.settings.normalize();

        if let Err(e) = preflight(&self.settings) {
            warn!(error = %e, "Download not started");
            let message = preflight_message(&e);
            self.log(format!("❌ {}", message));
            self.notice = Some(Notice::error("Error", message));
            return;
        }

        self.logs.clear();
        self.progress = 0;

        let job = DownloadJob {
            command: build_command(&self.settings),
            work_dir: resolve_work_dir(&self.settings),
        };
        info!(work_dir = %job.work_dir.display(), "Starting download");

        self.current_task = "Downloading...".into();
        self.job = Some(run_async(job, self.status_tx.clone()));
    }

    pub fn stop_download(&mut self) {
        let Some(job) = &self.job else { return };
        if job.is_stopping() {
            return;
        }
        job.stop();
        self.log("Stopping download...");
        self.current_task = "Stopping...".into();
    }

    pub fn save_settings(&mut self) {
        if let Some(path) = utils::pick_settings_to_save() {
            self.save_settings_to(&path);
        }
    }

    pub fn save_settings_to(&mut self, path: &Path) {
        self.settings.normalize();
        match hs_core::save_to_file(&self.settings, path) {
            Ok(()) => {
                if let Err(e) = hs_core::save_last(&self.settings) {
                    warn!(error = %e, "Could not update last settings");
                }
                self.log(format!("Settings saved to: {}", path.display()));
                self.notice = Some(Notice::info("Saved", "Settings saved successfully!"));
            }
            Err(e) => {
                self.log(format!("❌ Failed to save settings: {}", e));
                self.notice = Some(Notice::error("Error", format!("Failed to save settings: {}", e)));
            }
        }
    }

    pub fn load_settings(&mut self) {
        if let Some(path) = utils::pick_settings_to_load() {
            self.load_settings_from(&path);
        }
    }

    pub fn load_settings_from(&mut self, path: &Path) {
        match hs_core::load_from_file(path) {
            Ok(settings) => {
                self.settings = settings;
                self.log(format!("Settings loaded from: {}", path.display()));
                self.notice = Some(Notice::info("Loaded", "Settings loaded successfully!"));
            }
            Err(e) => {
                self.log(format!("❌ Failed to load settings: {}", e));
                self.notice = Some(Notice::error("Error", format!("Failed to load settings: {}", e)));
            }
        }
    }

    /// Applies one worker event. Returns true once the job has finished.
    pub fn handle_status(&mut self, status: DownloadStatus) -> bool {
        match status {
            DownloadStatus::Log(line) => self.log(line),
            DownloadStatus::Progress(pct) => self.progress = pct.min(100),
            DownloadStatus::CommandReady(cmd) => self.command_preview = cmd,
            DownloadStatus::Finished(outcome) => {
                info!(code = outcome.code(), "Download finished");
                self.log(outcome.summary());
                self.job = None;
                if !outcome.is_success() {
                    self.progress = 0;
                }
                self.current_task = match outcome {
                    ExitOutcome::Completed => "Done",
                    ExitOutcome::Stopped => "Stopped",
                    ExitOutcome::Failed(_) | ExitOutcome::Error(_) => "Error",
                }
                .into();
                return true;
            }
        }
        false
    }

    fn handle_messages(&mut self) {
        while let Ok(status) = self.status_rx.try_recv() {
            if self.handle_status(status) {
                if let Err(e) = hs_core::save_last(&self.settings) {
                    warn!(error = %e, "Could not save last settings");
                }
            }
        }
    }

    fn apply_window_level(&mut self, ctx: &egui::Context) {
        let on_top = self.settings.always_on_top;
        if self.applied_on_top == Some(on_top) {
            return;
        }
        let level = if on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
        self.applied_on_top = Some(on_top);
    }
}

impl eframe::App for HsApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let is_dark = match self.theme_preference {
            theme::Theme::Dark => true,
            theme::Theme::Light => false,
            theme::Theme::System => !matches!(frame.info().system_theme, Some(eframe::Theme::Light)),
        };
        theme::apply_settings(ctx, is_dark);

        self.handle_messages();
        self.apply_window_level(ctx);

        // Side -> Top -> Bottom -> Central (fill)
        self.render_sidebar(ctx);
        self.render_top_bar(ctx);
        self.render_bottom_panel(ctx, is_dark);
        self.render_content(ctx);
        self.render_notice(ctx);

        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Drop for HsApp {
    // Closing the window must not leave the downloader running.
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.stop();
            job.join();
        }
    }
}

impl HsApp {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("HLS SHELL")
                            .strong()
                            .size(18.0)
                            .color(theme::ACCENT),
                    );
                    ui.label(egui::RichText::new("N_m3u8DL-RE").weak().size(10.0));
                });
                ui.add_space(30.0);

                for tab in Tab::ALL {
                    let selected = self.current_tab == tab;
                    let text = if selected {
                        egui::RichText::new(tab.label())
                            .strong()
                            .color(egui::Color32::WHITE)
                    } else {
                        egui::RichText::new(tab.label())
                    };

                    let btn = egui::Button::new(text)
                        .min_size(egui::vec2(ui.available_width(), 40.0))
                        .rounding(6.0)
                        .fill(if selected {
                            theme::ACCENT
                        } else {
                            egui::Color32::TRANSPARENT
                        });

                    if ui.add(btn).clicked() {
                        self.current_tab = tab;
                    }
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(20.0);

                    let theme_text = match self.theme_preference {
                        theme::Theme::Light => "☀ Light",
                        theme::Theme::Dark => "🌙 Dark",
                        theme::Theme::System => "💻 System",
                    };

                    egui::ComboBox::from_id_source("theme_select")
                        .selected_text(theme_text)
                        .width(ui.available_width())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.theme_preference, theme::Theme::Light, "☀ Light");
                            ui.selectable_value(&mut self.theme_preference, theme::Theme::Dark, "🌙 Dark");
                            ui.selectable_value(&mut self.theme_preference, theme::Theme::System, "💻 System");
                        });

                    ui.add_space(5.0);
                    ui.separator();
                });
            });
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(44.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let pinned = self.settings.always_on_top;
                    let pin = egui::Button::new(
                        egui::RichText::new("📌").color(if pinned {
                            egui::Color32::BLACK
                        } else {
                            ui.visuals().text_color()
                        }),
                    )
                    .fill(if pinned {
                        theme::PINNED
                    } else {
                        egui::Color32::TRANSPARENT
                    })
                    .rounding(4.0);

                    let hover = if pinned { "Unpin window" } else { "Keep window on top" };
                    if ui.add(pin).on_hover_text(hover).clicked() {
                        self.settings.always_on_top = !pinned;
                    }

                    ui.separator();

                    if theme::styled_button(ui, "Clear Log", theme::ButtonVariant::Secondary).clicked() {
                        self.clear_log();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if theme::styled_button(ui, "Load Settings", theme::ButtonVariant::Secondary).clicked() {
                            self.load_settings();
                        }
                        if theme::styled_button(ui, "Save Settings", theme::ButtonVariant::Secondary).clicked() {
                            self.save_settings();
                        }
                        if theme::styled_button(ui, "Generate Command", theme::ButtonVariant::Primary).clicked() {
                            self.generate_command();
                        }
                    });
                });
            });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context, is_dark: bool) {
        let colors = theme::palette::get_colors(is_dark);

        // The frame fills the whole panel, margins included
        let panel_frame = egui::Frame::none()
            .fill(colors.bg_console)
            .inner_margin(15.0);

        egui::TopBottomPanel::bottom("bottom_bar")
            .resizable(false)
            .min_height(220.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                // 1. Header (status)
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("TERMINAL").strong().small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.is_busy() {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(theme::ACCENT),
                            );
                        } else {
                            let status_color = match self.current_task.as_str() {
                                "Error" => theme::DANGER,
                                "Done" => theme::SUCCESS,
                                _ => colors.text_weak,
                            };
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(status_color),
                            );
                        }
                    });
                });

                ui.add_space(5.0);
                ui.separator();
                ui.add_space(5.0);

                // 2. Console output, fixed height
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
                let weak = colors.text_weak;
                egui::ScrollArea::both()
                    .stick_to_bottom(true)
                    .max_height(110.0)
                    .auto_shrink([false; 2])
                    .show_rows(ui, row_height, self.logs.len(), |ui, rows| {
                        for line in &self.logs[rows] {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(line)
                                        .font(egui::FontId::monospace(12.0))
                                        .color(weak),
                                )
                                .wrap(false),
                            );
                        }
                    });

                // 3. Progress bar
                ui.add_space(10.0);
                let bar_height = 6.0;
                let rounding = 3.0;
                let (rect, _response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), bar_height),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(
                    rect,
                    rounding,
                    if is_dark {
                        egui::Color32::from_gray(40)
                    } else {
                        egui::Color32::from_gray(200)
                    },
                );
                if self.progress > 0 {
                    let fill_width = rect.width() * f32::from(self.progress) / 100.0;
                    let fill_rect =
                        egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, bar_height));
                    ui.painter().rect_filled(fill_rect, rounding, theme::ACCENT);
                }

                ui.add_space(10.0);

                // 4. Command field and controls
                ui.horizontal(|ui| {
                    let busy = self.is_busy();

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let stop = ui.add_enabled_ui(busy, |ui| {
                            theme::styled_button(ui, "⏹ Stop", theme::ButtonVariant::Danger)
                        });
                        if stop.inner.clicked() {
                            self.stop_download();
                        }

                        let start = ui.add_enabled_ui(!busy, |ui| {
                            theme::styled_button(ui, "▶ Start", theme::ButtonVariant::Primary)
                        });
                        if start.inner.clicked() {
                            self.start_download();
                        }

                        if ui
                            .add_enabled(!self.command_preview.is_empty(), egui::Button::new("📋"))
                            .on_hover_text("Copy command")
                            .clicked()
                        {
                            let text = self.command_preview.clone();
                            ui.output_mut(|o| o.copied_text = text);
                            self.log("Command copied to clipboard");
                        }

                        let mut preview = self.command_preview.as_str();
                        ui.add(
                            egui::TextEdit::singleline(&mut preview)
                                .hint_text("Generated command appears here")
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    });
                });
            });
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 5.0,
                        right: 17.5, // keeps clear of the scrollbar
                        top: 17.5,
                        bottom: 1.0,
                    })
                    .show(ui, |ui| match self.current_tab {
                        Tab::Source => tabs::source::show(self, ui),
                        Tab::Options => tabs::options::show(self, ui),
                        Tab::Live => tabs::live::show(self, ui),
                        Tab::Tracks => tabs::tracks::show(self, ui),
                        Tab::Decryption => tabs::decryption::show(self, ui),
                        Tab::Advanced => tabs::advanced::show(self, ui),
                    });
            });
        });
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else { return };
        let mut close = false;

        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let color = if notice.is_error {
                    theme::DANGER
                } else {
                    ui.visuals().text_color()
                };
                ui.label(egui::RichText::new(&notice.body).color(color));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn finish(app: &mut HsApp, outcome: ExitOutcome) -> bool {
        app.handle_status(DownloadStatus::Finished(outcome))
    }

    #[test]
    fn log_keeps_only_the_newest_lines() {
        let mut app = HsApp::default();
        for i in 0..MAX_LOG_LINES + 10 {
            app.log(format!("line {}", i));
        }
        assert_eq!(app.logs.len(), MAX_LOG_LINES);
        assert_eq!(app.logs.last().map(String::as_str), Some("line 5009"));
    }

    #[test]
    fn clear_log_leaves_a_marker() {
        let mut app = HsApp::default();
        app.log("something");
        app.clear_log();
        assert_eq!(app.logs, vec!["Log cleared".to_string()]);
    }

    #[test]
    fn status_events_update_the_view() {
        let mut app = HsApp::default();
        assert!(!app.handle_status(DownloadStatus::CommandReady("tool --x".into())));
        assert!(!app.handle_status(DownloadStatus::Log("segment 1".into())));
        assert!(!app.handle_status(DownloadStatus::Progress(42)));

        assert_eq!(app.command_preview, "tool --x");
        assert_eq!(app.logs.last().map(String::as_str), Some("segment 1"));
        assert_eq!(app.progress, 42);
    }

    #[test]
    fn completed_download_keeps_full_bar() {
        let mut app = HsApp::default();
        app.handle_status(DownloadStatus::Progress(100));
        assert!(finish(&mut app, ExitOutcome::Completed));

        assert_eq!(app.progress, 100);
        assert_eq!(app.current_task, "Done");
        assert!(!app.is_busy());
        assert!(app.logs.iter().any(|l| l.contains("Download complete")));
    }

    #[test]
    fn failed_or_stopped_download_resets_bar() {
        let mut app = HsApp::default();
        app.handle_status(DownloadStatus::Progress(60));
        finish(&mut app, ExitOutcome::Failed(2));
        assert_eq!(app.progress, 0);
        assert_eq!(app.current_task, "Error");
        assert!(app.logs.iter().any(|l| l.contains("exit code: 2")));

        app.handle_status(DownloadStatus::Progress(30));
        finish(&mut app, ExitOutcome::Stopped);
        assert_eq!(app.progress, 0);
        assert_eq!(app.current_task, "Stopped");
    }

    #[test]
    fn missing_executable_blocks_start() {
        let mut settings = DownloadSettings::default();
        settings.executable = "/nonexistent/hs-test/N_m3u8DL-RE".into();
        settings.m3u8_url = "https://example.com/a.m3u8".into();
        let mut app = HsApp::new(settings);

        app.start_download();

        assert!(!app.is_busy());
        let notice = app.notice.take().expect("notice shown");
        assert!(notice.is_error);
        assert_eq!(notice.body, "Executable does not exist!");
    }

    #[test]
    fn generate_command_fills_preview() {
        let mut settings = DownloadSettings::default();
        settings.executable = "N_m3u8DL-RE".into();
        settings.m3u8_url = "https://example.com/a.m3u8".into();
        let mut app = HsApp::new(settings);

        app.generate_command();

        assert!(app.command_preview.starts_with("N_m3u8DL-RE https://example.com/a.m3u8"));
        assert_eq!(
            app.logs.last().map(String::as_str),
            Some("Command generated, ready to copy")
        );
    }

    #[test]
    fn load_settings_applies_file_and_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, r#"{ "m3u8_url": "https://example.com/live.m3u8", "always_on_top": true }"#)
            .unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        let mut app = HsApp::default();
        app.load_settings_from(&good);
        assert_eq!(app.settings.m3u8_url, "https://example.com/live.m3u8");
        assert!(app.settings.always_on_top);
        assert!(!app.notice.take().unwrap().is_error);

        app.load_settings_from(&bad);
        assert_eq!(app.settings.m3u8_url, "https://example.com/live.m3u8");
        assert!(app.notice.take().unwrap().is_error);
    }
}
