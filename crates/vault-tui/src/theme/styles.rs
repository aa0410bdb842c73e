use super::colors::*;
use ratatui::style::{Color, Modifier, Style};
use vault_domain::FolderColor;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn brand_title() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn link_text() -> Style {
    Style::default()
        .fg(LINK_TEXT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn toggle_style(on: bool) -> Style {
    Style::default().fg(if on { TOGGLE_ON } else { TOGGLE_OFF })
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn success_text() -> Style {
    Style::default().fg(SUCCESS_COLOR)
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(BRAND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED_TEXT)
    }
}

/// Background swatch in the folder's palette colour.
pub fn folder_swatch(color: FolderColor) -> Style {
    let (r, g, b) = color.rgb();
    Style::default().bg(Color::Rgb(r, g, b)).fg(Color::Black)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
