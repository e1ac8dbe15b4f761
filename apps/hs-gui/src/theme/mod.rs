pub mod palette;
pub mod style;
pub mod widgets;

pub use palette::{ACCENT, DANGER, PINNED, SUCCESS};
pub use style::apply_settings;
pub use widgets::{
    card, enum_combo, number_input, path_input, styled_button, text_input, ButtonVariant,
};

#[derive(PartialEq, Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
    System,
}
