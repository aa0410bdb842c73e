use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;
pub const SELECTED_BG: Color = Color::Blue;

pub const BRAND: Color = Color::Rgb(0x6d, 0x28, 0xd9);
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const LINK_TEXT: Color = Color::LightBlue;

pub const TOGGLE_ON: Color = Color::Green;
pub const TOGGLE_OFF: Color = Color::DarkGray;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
pub const SUCCESS_COLOR: Color = Color::Green;
pub const DISABLED_TEXT: Color = Color::DarkGray;
