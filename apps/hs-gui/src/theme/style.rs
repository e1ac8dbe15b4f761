use super::palette;
use eframe::egui;

pub fn apply_settings(ctx: &egui::Context, is_dark: bool) {
    let colors = palette::get_colors(is_dark);

    let mut visuals = if is_dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.window_rounding = egui::Rounding::same(8.0);
    visuals.panel_fill = colors.bg_base;
    visuals.widgets.noninteractive.bg_fill = colors.bg_base;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, colors.text_strong);
    visuals.selection.bg_fill = colors.accent;
    visuals.hyperlink_color = colors.accent;

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;

    // Form-heavy screens: slightly smaller body text than a dashboard
    style.text_styles = [
        (
            egui::TextStyle::Heading,
            egui::FontId::new(22.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::new(12.5, egui::FontFamily::Monospace),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::new(14.0, egui::FontFamily::Proportional),
        ),
        (
            egui::TextStyle::Small,
            egui::FontId::new(11.0, egui::FontFamily::Proportional),
        ),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 6.0);
    style.spacing.interact_size.y = 26.0;

    ctx.set_style(style);
}
