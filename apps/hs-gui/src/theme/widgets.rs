use super::palette::{self, Palette, DANGER};
use eframe::egui;
use std::fmt::Display;
use std::path::PathBuf;

// ============================================================================
// BUTTONS
// ============================================================================

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn get_colors(&self, colors: &Palette) -> (egui::Color32, egui::Color32) {
        match self {
            ButtonVariant::Primary => (colors.accent, egui::Color32::WHITE),
            ButtonVariant::Secondary => (colors.bg_input, colors.text_strong),
            ButtonVariant::Danger => (DANGER, egui::Color32::WHITE),
        }
    }
}

pub fn styled_button(ui: &mut egui::Ui, text: &str, variant: ButtonVariant) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let (bg_color, text_color) = variant.get_colors(&colors);

    ui.add(
        egui::Button::new(egui::RichText::new(text).color(text_color).strong())
            .fill(bg_color)
            .rounding(6.0)
            .min_size(egui::vec2(0.0, 30.0)),
    )
}

// ============================================================================
// CARD
// ============================================================================

/// Titled section box. Returns the body's value and whether the optional
/// header action was clicked.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    action: Option<(&str, ButtonVariant)>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> (R, bool) {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let mut action_clicked = false;

    let inner = egui::Frame::none()
        .fill(colors.bg_base)
        .rounding(8.0)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            egui::Frame::none()
                .fill(colors.bg_header)
                .rounding(egui::Rounding {
                    nw: 8.0,
                    ne: 8.0,
                    sw: 0.0,
                    se: 0.0,
                })
                .inner_margin(egui::Margin::symmetric(14.0, 6.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .strong()
                                .size(13.5)
                                .color(colors.text_strong),
                        );

                        if let Some((label, variant)) = action {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let (bg, fg) = variant.get_colors(&colors);
                                    let btn = egui::Button::new(
                                        egui::RichText::new(label).size(12.0).color(fg),
                                    )
                                    .fill(bg)
                                    .rounding(4.0)
                                    .min_size(egui::vec2(60.0, 22.0));
                                    if ui.add(btn).clicked() {
                                        action_clicked = true;
                                    }
                                },
                            );
                        }
                    });
                });

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, colors.border);

            egui::Frame::none()
                .inner_margin(14.0)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    add_contents(ui)
                })
                .inner
        })
        .inner;

    (inner, action_clicked)
}

// ============================================================================
// INPUTS
// ============================================================================

pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let rounding = egui::Rounding::same(5.0);

    let response = egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .fill(colors.bg_input)
        .rounding(rounding)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .frame(false)
                    .text_color(colors.text_strong)
                    .vertical_align(egui::Align::Center),
            )
        })
        .inner;

    if response.has_focus() {
        let rect = response.rect.expand2(egui::vec2(10.0, 6.0));
        ui.painter()
            .rect_stroke(rect, rounding, egui::Stroke::new(1.5, colors.accent));
    }

    response
}

/// Text input with a browse button; `browse` runs the picker on click.
pub fn path_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    browse: impl FnOnce() -> Option<PathBuf>,
) -> egui::Response {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("📂").on_hover_text("Browse...").clicked() {
            if let Some(path) = browse() {
                *value = path.to_string_lossy().into_owned();
            }
        }
        text_input(ui, value, hint)
    })
    .inner
}

pub fn number_input(
    ui: &mut egui::Ui,
    value: &mut u32,
    (lo, hi): (u32, u32),
    suffix: &str,
) -> egui::Response {
    ui.add(
        egui::DragValue::new(value)
            .clamp_range(lo..=hi)
            .speed(0.25)
            .suffix(suffix),
    )
}

// ============================================================================
// COMBO BOX
// ============================================================================

/// Combo box over a closed set of values, labelled by their `Display` text.
pub fn enum_combo<T>(ui: &mut egui::Ui, id: &str, value: &mut T, options: &[T])
where
    T: Copy + PartialEq + Display,
{
    let colors = palette::get_colors(ui.visuals().dark_mode);

    ui.scope(|ui| {
        let v = ui.visuals_mut();
        v.widgets.inactive.rounding = 5.0.into();
        v.widgets.inactive.weak_bg_fill = colors.bg_input;
        v.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, colors.border);
        v.widgets.hovered = v.widgets.inactive;
        v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors.accent);
        v.widgets.open = v.widgets.inactive;
        v.widgets.open.bg_stroke = egui::Stroke::new(1.5, colors.accent);

        egui::ComboBox::from_id_source(id)
            .selected_text(value.to_string())
            .width(160.0)
            .show_ui(ui, |ui| {
                let lv = ui.visuals_mut();
                lv.widgets.active.weak_bg_fill = colors.accent;
                lv.widgets.active.bg_fill = colors.accent;
                lv.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

                for option in options {
                    ui.selectable_value(value, *option, option.to_string());
                }
            });
    });
}
