use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vault_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Submit,
    NextField,
    PrevField,
}

/// Maps a key press inside a form; printable keys edit `input`.
pub fn handle_field_input(input: &mut InputState, key: KeyEvent) -> DialogAction {
    if let Some(action) = navigation_action(key) {
        return action;
    }
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    DialogAction::None
}

/// Keys shared by every form field regardless of what it edits.
pub fn navigation_action(key: KeyEvent) -> Option<DialogAction> {
    match key.code {
        KeyCode::Esc => Some(DialogAction::Cancel),
        KeyCode::Enter => Some(DialogAction::Submit),
        KeyCode::Tab => Some(DialogAction::NextField),
        KeyCode::BackTab => Some(DialogAction::PrevField),
        _ => None,
    }
}
