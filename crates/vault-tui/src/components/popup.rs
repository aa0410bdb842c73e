use crate::theme::{focused_border, label_text, normal_text, popup_bg, unfocused_border};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use vault_core::InputState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Draws a bordered single-line field; places the terminal cursor when focused.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    input: &InputState,
    focused: bool,
) {
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(border);

    let paragraph = if input.is_empty() {
        Paragraph::new(placeholder.to_string()).style(label_text())
    } else {
        Paragraph::new(input.text()).style(normal_text())
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let offset = u16::try_from(input.cursor_pos()).unwrap_or(u16::MAX);
        let cursor_x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}
