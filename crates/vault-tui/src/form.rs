use crossterm::event::{KeyCode, KeyEvent};
use vault_backend::{AddItemRequest, CreateFolderRequest};
use vault_core::InputState;
use vault_domain::{FolderIcon, FolderId};

use crate::dialog::{handle_field_input, navigation_action, DialogAction};

/// Lifecycle shared by both modal forms.
///
/// While `submitting` is set the form accepts no further submits and
/// cannot be dismissed; `error` holds the message of the last failed try.
#[derive(Debug, Clone, Default)]
pub struct SubmitState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmitState {
    pub fn begin(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderFormField {
    #[default]
    Name,
    Icon,
}

#[derive(Debug, Clone, Default)]
pub struct CreateFolderForm {
    pub name: InputState,
    pub icon_index: usize,
    pub focus: FolderFormField,
    pub state: SubmitState,
}

impl CreateFolderForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self) -> FolderIcon {
        FolderIcon::PICKER[self.icon_index % FolderIcon::PICKER.len()]
    }

    pub fn can_submit(&self) -> bool {
        !self.state.submitting && !self.name.is_blank()
    }

    pub fn request(&self) -> CreateFolderRequest {
        CreateFolderRequest::new(self.name.trimmed(), self.icon())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        if self.state.submitting {
            return DialogAction::None;
        }
        let action = match self.focus {
            FolderFormField::Name => handle_field_input(&mut self.name, key),
            FolderFormField::Icon => self.handle_icon_key(key),
        };
        match action {
            DialogAction::NextField | DialogAction::PrevField => {
                self.focus = match self.focus {
                    FolderFormField::Name => FolderFormField::Icon,
                    FolderFormField::Icon => FolderFormField::Name,
                };
                DialogAction::None
            }
            other => other,
        }
    }

    fn handle_icon_key(&mut self, key: KeyEvent) -> DialogAction {
        if let Some(action) = navigation_action(key) {
            return action;
        }
        let len = FolderIcon::PICKER.len();
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.icon_index = (self.icon_index + 1) % len,
            KeyCode::Left | KeyCode::Char('h') => self.icon_index = (self.icon_index + len - 1) % len,
            _ => {}
        }
        DialogAction::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormField {
    #[default]
    Url,
    Title,
    Description,
}

impl ContentFormField {
    fn next(self) -> Self {
        match self {
            ContentFormField::Url => ContentFormField::Title,
            ContentFormField::Title => ContentFormField::Description,
            ContentFormField::Description => ContentFormField::Url,
        }
    }

    fn prev(self) -> Self {
        match self {
            ContentFormField::Url => ContentFormField::Description,
            ContentFormField::Title => ContentFormField::Url,
            ContentFormField::Description => ContentFormField::Title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddContentForm {
    pub folder_id: FolderId,
    pub url: InputState,
    pub title: InputState,
    pub description: InputState,
    pub focus: ContentFormField,
    pub state: SubmitState,
}

impl AddContentForm {
    pub fn new(folder_id: FolderId) -> Self {
        Self {
            folder_id,
            url: InputState::new(),
            title: InputState::new(),
            description: InputState::new(),
            focus: ContentFormField::Url,
            state: SubmitState::default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.state.submitting && self.request().content().is_submittable()
    }

    pub fn request(&self) -> AddItemRequest {
        let description = self.description.trimmed();
        AddItemRequest {
            folder_id: self.folder_id.clone(),
            title: self.title.trimmed(),
            url: self.url.trimmed(),
            description: (!description.is_empty()).then_some(description),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogAction {
        if self.state.submitting {
            return DialogAction::None;
        }
        let field = match self.focus {
            ContentFormField::Url => &mut self.url,
            ContentFormField::Title => &mut self.title,
            ContentFormField::Description => &mut self.description,
        };
        match handle_field_input(field, key) {
            DialogAction::NextField => {
                self.focus = self.focus.next();
                DialogAction::None
            }
            DialogAction::PrevField => {
                self.focus = self.focus.prev();
                DialogAction::None
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut AddContentForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_folder_form_requires_non_blank_name() {
        let mut form = CreateFolderForm::new();
        assert!(!form.can_submit());
        form.name.set("   ");
        assert!(!form.can_submit());
        form.name.set(" Recipes ");
        assert!(form.can_submit());
        assert_eq!(form.request().name, "Recipes");
        assert_eq!(form.request().icon, FolderIcon::Folder);
    }

    #[test]
    fn test_icon_picker_wraps_both_ways() {
        let mut form = CreateFolderForm::new();
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, FolderFormField::Icon);
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.icon(), FolderIcon::Archive);
        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.icon(), FolderIcon::Travel);
    }

    #[test]
    fn test_submitting_form_ignores_keys() {
        let mut form = CreateFolderForm::new();
        form.name.set("Videos");
        form.state.begin();
        assert!(!form.can_submit());
        assert_eq!(form.handle_key(key(KeyCode::Esc)), DialogAction::None);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), DialogAction::None);
    }

    #[test]
    fn test_content_form_cycles_fields_and_builds_request() {
        let mut form = AddContentForm::new(FolderId::from("1"));
        type_text(&mut form, "https://example.com/pho");
        form.handle_key(key(KeyCode::Tab));
        assert!(!form.can_submit());
        type_text(&mut form, "Pho");
        assert!(form.can_submit());
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, ContentFormField::Url);

        let request = form.request();
        assert_eq!(request.url, "https://example.com/pho");
        assert_eq!(request.title, "Pho");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_failure_reenables_submit() {
        let mut form = AddContentForm::new(FolderId::from("1"));
        form.url.set("https://x");
        form.title.set("T");
        form.state.begin();
        assert!(!form.can_submit());
        form.state.fail("Network error".to_string());
        assert!(form.can_submit());
        assert_eq!(form.state.error.as_deref(), Some("Network error"));
    }
}
