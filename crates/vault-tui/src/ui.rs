use crate::app::{App, Modal, Screen, SettingsEntry};
use crate::components::*;
use crate::form::{AddContentForm, ContentFormField, CreateFolderForm, FolderFormField};
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use vault_domain::FolderIcon;

const FOLDER_CARD_HEIGHT: u16 = 4;
const CONTENT_CARD_HEIGHT: u16 = 6;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    match app.screen {
        Screen::Welcome => render_welcome(frame, chunks[0]),
        Screen::Login => render_login(app, frame, chunks[0]),
        Screen::Dashboard => render_dashboard(app, frame, chunks[0]),
        Screen::Folder => render_folder(app, frame, chunks[0]),
        Screen::Settings => render_settings(app, frame, chunks[0]),
    }
    render_footer(app, frame, chunks[1]);

    match &app.modal {
        Some(Modal::CreateFolder(form)) => render_create_folder_popup(form, frame),
        Some(Modal::AddContent(form)) => render_add_content_popup(form, frame),
        None => {}
    }
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("ContentVault", brand_title())),
        Line::from(""),
        Line::from(Span::styled(
            "Save the links you care about and keep them in folders.",
            normal_text(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Get Started ", button(true))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(unfocused_border()));
    frame.render_widget(paragraph, area);
}

fn render_login(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Sign in", brand_title())),
        Line::from(""),
    ];
    if app.signing_in {
        lines.push(Line::from(Span::styled(" Signing in... ", button(false))));
    } else {
        lines.push(Line::from(Span::styled(" Sign in with Google ", button(true))));
    }
    if let Some(error) = &app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(error.clone(), error_text())));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(unfocused_border()));
    frame.render_widget(paragraph, area);
}

fn screen_block(title: &str, subtitle: String) -> Block<'static> {
    Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", title), brand_title()),
            Span::styled(subtitle, label_text()),
        ]))
        .borders(Borders::ALL)
        .border_style(focused_border())
}

fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    let block = screen_block("My Folders", format!("[{}] ", app.dashboard_view));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.folders.is_empty() {
        let empty = Paragraph::new("No folders yet. Press n to create one.")
            .style(label_text())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    render_card_collection(
        frame,
        inner,
        &app.folders,
        app.dashboard_view,
        app.folder_selection.get(),
        FOLDER_CARD_HEIGHT,
        folder_card,
    );
}

fn render_folder(app: &App, frame: &mut Frame, area: Rect) {
    let Some(view) = &app.active_folder else {
        let block = screen_block("Loading", String::new());
        frame.render_widget(
            Paragraph::new("Loading folder...")
                .style(label_text())
                .block(block),
            area,
        );
        return;
    };

    let title = format!("{} {}", view.icon.glyph(), view.name);
    let block = screen_block(
        &title,
        format!("{} [{}] ", view.item_count_label(), app.folder_view_mode),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.items.is_empty() {
        let hint = if view.known {
            "This folder is empty. Press a to add content."
        } else {
            "This folder is empty."
        };
        let empty = Paragraph::new(hint)
            .style(label_text())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    render_card_collection(
        frame,
        inner,
        &view.items,
        app.folder_view_mode,
        app.item_selection.get(),
        CONTENT_CARD_HEIGHT,
        content_card,
    );
}

fn render_settings(app: &App, frame: &mut Frame, area: Rect) {
    let block = screen_block("Settings", String::new());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if let Some(session) = &app.session {
        lines.push(Line::from(vec![
            Span::styled("Signed in as ", label_text()),
            Span::styled(session.display_name.clone(), bold_highlight()),
            Span::styled(format!(" via {}", session.provider), label_text()),
        ]));
        lines.push(Line::from(""));
    }

    for (idx, entry) in SettingsEntry::ALL.iter().enumerate() {
        let selected = app.settings_selection.get() == Some(idx);
        let marker = if selected { "> " } else { "  " };
        let mut spans = vec![Span::styled(
            format!("{}{:<16}", marker, entry.title()),
            if selected { bold_highlight() } else { normal_text() },
        )];
        let toggle = match entry {
            SettingsEntry::Notifications => Some(app.notifications),
            SettingsEntry::AutoSync => Some(app.auto_sync),
            _ => None,
        };
        if let Some(on) = toggle {
            spans.push(Span::styled(if on { "[on]" } else { "[off]" }, toggle_style(on)));
        }
        lines.push(Line::from(spans).style(selected_item(selected)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match (&app.modal, app.screen) {
        (Some(_), _) => "Tab: next field | Enter: save | Esc: cancel",
        (None, Screen::Welcome) => "Enter: get started | q: quit",
        (None, Screen::Login) => "Enter: sign in | Esc: back | q: quit",
        (None, Screen::Dashboard) => {
            "hjkl/arrows: move | Enter: open | n: new folder | v: view | Tab: settings | q: quit"
        }
        (None, Screen::Folder) => {
            "hjkl/arrows: move | a: add | d: delete | y: copy link | v: view | Esc: back | q: quit"
        }
        (None, Screen::Settings) => "j/k: move | Enter: select | Tab: folders | q: quit",
    };

    let mut spans = vec![Span::styled(hints, label_text())];
    if app.in_flight() > 0 {
        spans.push(Span::styled("  working...", highlight_text()));
    }
    if let Some(status) = &app.status {
        let style = if status.is_error {
            error_text()
        } else {
            success_text()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.text.clone(), style));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(unfocused_border()));
    frame.render_widget(footer, area);
}

fn submit_line(label: &str, enabled: bool, submitting: bool) -> Line<'static> {
    let text = if submitting {
        " Saving... ".to_string()
    } else {
        format!(" {} ", label)
    };
    Line::from(Span::styled(text, button(enabled)))
}

fn render_create_folder_popup(form: &CreateFolderForm, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Create Folder", 60, 50);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Folder name",
        "e.g. Recipes",
        &form.name,
        form.focus == FolderFormField::Name,
    );

    let icon_focused = form.focus == FolderFormField::Icon;
    let current = form.icon();
    let icons: Vec<Span> = FolderIcon::PICKER
        .iter()
        .map(|icon| {
            let style = if *icon == current {
                bold_highlight()
            } else {
                label_text()
            };
            Span::styled(format!(" {} ", icon.glyph()), style)
        })
        .collect();
    let icon_block = Block::default()
        .title(format!("Icon: {}", current.label()))
        .borders(Borders::ALL)
        .border_style(if icon_focused {
            focused_border()
        } else {
            unfocused_border()
        });
    frame.render_widget(Paragraph::new(Line::from(icons)).block(icon_block), chunks[1]);

    frame.render_widget(
        Paragraph::new(submit_line(
            "Create",
            form.can_submit(),
            form.state.submitting,
        )),
        chunks[2],
    );

    if let Some(error) = &form.state.error {
        frame.render_widget(
            Paragraph::new(error.clone())
                .style(error_text())
                .wrap(Wrap { trim: true }),
            chunks[3],
        );
    }
}

fn render_add_content_popup(form: &AddContentForm, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Add Content", 70, 60);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "URL",
        "https://",
        &form.url,
        form.focus == ContentFormField::Url,
    );
    render_text_field(
        frame,
        chunks[1],
        "Title",
        "What is this link?",
        &form.title,
        form.focus == ContentFormField::Title,
    );
    render_text_field(
        frame,
        chunks[2],
        "Description (optional)",
        "",
        &form.description,
        form.focus == ContentFormField::Description,
    );

    frame.render_widget(
        Paragraph::new(submit_line("Save", form.can_submit(), form.state.submitting)),
        chunks[3],
    );

    if let Some(error) = &form.state.error {
        frame.render_widget(
            Paragraph::new(error.clone())
                .style(error_text())
                .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }
}
