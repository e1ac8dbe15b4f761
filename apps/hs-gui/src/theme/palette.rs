use eframe::egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(0, 150, 136);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
pub const DANGER: Color32 = Color32::from_rgb(210, 60, 60);
/// Pin button when the window is kept on top.
pub const PINNED: Color32 = Color32::from_rgb(255, 184, 198);

// Dark
pub const DARK_BG_BASE: Color32 = Color32::from_rgb(30, 31, 34);
pub const DARK_BG_HEADER: Color32 = Color32::from_rgb(38, 40, 44);
pub const DARK_BG_INPUT: Color32 = Color32::from_rgb(44, 46, 51);
pub const DARK_BG_CONSOLE: Color32 = Color32::from_rgb(20, 20, 23);
pub const DARK_BORDER: Color32 = Color32::from_gray(62);
pub const DARK_TEXT_STRONG: Color32 = Color32::from_gray(236);
pub const DARK_TEXT_WEAK: Color32 = Color32::from_gray(150);

// Light
pub const LIGHT_BG_BASE: Color32 = Color32::from_rgb(255, 255, 255);
pub const LIGHT_BG_HEADER: Color32 = Color32::from_gray(246);
pub const LIGHT_BG_INPUT: Color32 = Color32::from_rgb(240, 241, 245);
pub const LIGHT_BG_CONSOLE: Color32 = Color32::from_rgb(238, 239, 243);
pub const LIGHT_BORDER: Color32 = Color32::from_gray(218);
pub const LIGHT_TEXT_STRONG: Color32 = Color32::from_gray(36);
pub const LIGHT_TEXT_WEAK: Color32 = Color32::from_gray(105);

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_header: Color32,
    pub bg_input: Color32,
    pub bg_console: Color32,
    pub border: Color32,
    pub text_strong: Color32,
    pub text_weak: Color32,
    pub accent: Color32,
}

pub fn get_colors(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            bg_base: DARK_BG_BASE,
            bg_header: DARK_BG_HEADER,
            bg_input: DARK_BG_INPUT,
            bg_console: DARK_BG_CONSOLE,
            border: DARK_BORDER,
            text_strong: DARK_TEXT_STRONG,
            text_weak: DARK_TEXT_WEAK,
            accent: ACCENT,
        }
    } else {
        Palette {
            bg_base: LIGHT_BG_BASE,
            bg_header: LIGHT_BG_HEADER,
            bg_input: LIGHT_BG_INPUT,
            bg_console: LIGHT_BG_CONSOLE,
            border: LIGHT_BORDER,
            text_strong: LIGHT_TEXT_STRONG,
            text_weak: LIGHT_TEXT_WEAK,
            accent: ACCENT,
        }
    }
}
