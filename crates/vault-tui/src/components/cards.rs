use crate::theme::{
    bold_highlight, focused_border, folder_swatch, label_text, link_text, normal_text,
    unfocused_border,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use vault_domain::{ContentItem, Folder, ViewMode};

/// Lays `items` out as rows of `view_mode.columns()` cards, scrolled so the
/// selected card stays on screen.
pub fn render_card_collection<T>(
    frame: &mut Frame,
    area: Rect,
    items: &[T],
    view_mode: ViewMode,
    selected: Option<usize>,
    card_height: u16,
    card: impl Fn(&T, bool) -> Paragraph<'static>,
) {
    let columns = view_mode.columns();
    let visible_rows = (area.height / card_height).max(1) as usize;
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..visible_rows)
                .map(|_| Constraint::Length(card_height))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= items.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..columns)
                    .map(|_| Constraint::Ratio(1, columns as u32))
                    .collect::<Vec<_>>(),
            )
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            if let Some(item) = items.get(index) {
                frame.render_widget(card(item, selected == Some(index)), *cell);
            }
        }
    }
}

fn card_block(title: Line<'static>, selected: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if selected {
            focused_border()
        } else {
            unfocused_border()
        })
}

pub fn folder_card(folder: &Folder, selected: bool) -> Paragraph<'static> {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", folder.icon.glyph()), folder_swatch(folder.color)),
        Span::raw(" "),
        Span::styled(folder.name.clone(), bold_highlight()),
    ]);
    let body = vec![
        Line::from(Span::styled(folder.item_count_label(), label_text())),
        Line::from(Span::styled(folder.icon.label().to_string(), label_text())),
    ];
    Paragraph::new(body).block(card_block(title, selected))
}

pub fn content_card(item: &ContentItem, selected: bool) -> Paragraph<'static> {
    let title = Line::from(Span::styled(format!(" {} ", item.title), bold_highlight()));
    let mut body = vec![Line::from(Span::styled(item.url.clone(), link_text()))];
    if let Some(description) = &item.description {
        body.push(Line::from(Span::styled(description.clone(), normal_text())));
    }
    body.push(Line::from(Span::styled(item.display_date(), label_text())));
    Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(card_block(title, selected))
}
