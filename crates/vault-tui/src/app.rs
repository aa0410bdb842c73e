use crate::{
    clipboard,
    completion::Completion,
    dialog::DialogAction,
    events::{Event, EventHandler},
    form::{AddContentForm, CreateFolderForm},
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use vault_backend::{Session, VaultBackend};
use vault_core::{AppConfig, SelectionState, VaultError, VaultResult};
use vault_domain::{ContentItem, Folder, FolderId, FolderView, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Login,
    Dashboard,
    Folder,
    Settings,
}

#[derive(Debug, Clone)]
pub enum Modal {
    CreateFolder(CreateFolderForm),
    AddContent(AddContentForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEntry {
    Notifications,
    AutoSync,
    Profile,
    Security,
    Logout,
}

impl SettingsEntry {
    pub const ALL: [SettingsEntry; 5] = [
        SettingsEntry::Notifications,
        SettingsEntry::AutoSync,
        SettingsEntry::Profile,
        SettingsEntry::Security,
        SettingsEntry::Logout,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SettingsEntry::Notifications => "Notifications",
            SettingsEntry::AutoSync => "Auto Sync",
            SettingsEntry::Profile => "Profile",
            SettingsEntry::Security => "Security",
            SettingsEntry::Logout => "Logout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub modal: Option<Modal>,
    pub session: Option<Session>,
    pub signing_in: bool,
    pub login_error: Option<String>,
    pub folders: Vec<Folder>,
    pub folder_selection: SelectionState,
    pub dashboard_view: ViewMode,
    pub active_folder_id: Option<FolderId>,
    pub active_folder: Option<FolderView>,
    pub item_selection: SelectionState,
    pub folder_view_mode: ViewMode,
    pub settings_selection: SelectionState,
    pub notifications: bool,
    pub auto_sync: bool,
    pub status: Option<StatusMessage>,
    default_view: ViewMode,
    backend: Arc<dyn VaultBackend>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl App {
    pub fn new(backend: Arc<dyn VaultBackend>, config: &AppConfig) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let default_view = ViewMode::from(config.effective_view_mode());
        let mut settings_selection = SelectionState::new();
        settings_selection.set(Some(0));
        Self {
            should_quit: false,
            screen: Screen::Welcome,
            modal: None,
            session: None,
            signing_in: false,
            login_error: None,
            folders: Vec::new(),
            folder_selection: SelectionState::new(),
            dashboard_view: default_view,
            active_folder_id: None,
            active_folder: None,
            item_selection: SelectionState::new(),
            folder_view_mode: default_view,
            settings_selection,
            notifications: true,
            auto_sync: true,
            status: None,
            default_view,
            backend,
            completion_tx,
            completion_rx,
            in_flight: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Backend calls sent but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.folder_selection
            .get()
            .and_then(|idx| self.folders.get(idx))
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        let view = self.active_folder.as_ref()?;
        self.item_selection.get().and_then(|idx| view.items.get(idx))
    }

    /// Waits for the next backend result and applies it.
    pub async fn settle(&mut self) -> bool {
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(task.await);
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
            return;
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Welcome => {
                if key.code == KeyCode::Enter {
                    self.screen = Screen::Login;
                }
            }
            Screen::Login => match key.code {
                KeyCode::Enter => self.sign_in(),
                KeyCode::Esc if !self.signing_in => self.screen = Screen::Welcome,
                _ => {}
            },
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Folder => self.handle_folder_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let len = self.folders.len();
        let columns = self.dashboard_view.columns();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.folder_selection.down(columns, len),
            KeyCode::Char('k') | KeyCode::Up => self.folder_selection.up(columns, len),
            KeyCode::Char('l') | KeyCode::Right => self.folder_selection.next(len),
            KeyCode::Char('h') | KeyCode::Left => self.folder_selection.prev(len),
            KeyCode::Char('v') => self.dashboard_view = self.dashboard_view.toggled(),
            KeyCode::Char('n') => {
                self.status = None;
                self.modal = Some(Modal::CreateFolder(CreateFolderForm::new()));
            }
            KeyCode::Char('r') => self.reload_folders(),
            KeyCode::Enter => {
                if let Some(id) = self.selected_folder().map(|f| f.id.clone()) {
                    self.open_folder(id);
                }
            }
            KeyCode::Tab => {
                self.status = None;
                self.screen = Screen::Settings;
            }
            _ => {}
        }
    }

    fn handle_folder_key(&mut self, key: KeyEvent) {
        let len = self.active_folder.as_ref().map_or(0, |v| v.items.len());
        let columns = self.folder_view_mode.columns();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.item_selection.down(columns, len),
            KeyCode::Char('k') | KeyCode::Up => self.item_selection.up(columns, len),
            KeyCode::Char('l') | KeyCode::Right => self.item_selection.next(len),
            KeyCode::Char('h') | KeyCode::Left => self.item_selection.prev(len),
            KeyCode::Char('v') => self.folder_view_mode = self.folder_view_mode.toggled(),
            KeyCode::Char('a') => {
                if let Some(view) = self.active_folder.as_ref().filter(|v| v.known) {
                    self.status = None;
                    self.modal = Some(Modal::AddContent(AddContentForm::new(view.id.clone())));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_item(),
            KeyCode::Char('y') => self.copy_selected_link(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.screen = Screen::Dashboard;
                self.active_folder_id = None;
                self.active_folder = None;
                self.status = None;
                self.reload_folders();
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let len = SettingsEntry::ALL.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.settings_selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.settings_selection.prev(len),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let entry = self
                    .settings_selection
                    .get()
                    .and_then(|idx| SettingsEntry::ALL.get(idx).copied());
                match entry {
                    Some(SettingsEntry::Notifications) => self.notifications = !self.notifications,
                    Some(SettingsEntry::AutoSync) => self.auto_sync = !self.auto_sync,
                    Some(SettingsEntry::Profile) | Some(SettingsEntry::Security) => {
                        self.set_status("Not available yet", false);
                    }
                    Some(SettingsEntry::Logout) => self.logout(),
                    None => {}
                }
            }
            KeyCode::Tab | KeyCode::Esc => {
                self.status = None;
                self.screen = Screen::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let action = match self.modal.as_mut() {
            Some(Modal::CreateFolder(form)) => form.handle_key(key),
            Some(Modal::AddContent(form)) => form.handle_key(key),
            None => return,
        };
        match action {
            DialogAction::Cancel => self.modal = None,
            DialogAction::Submit => self.submit_modal(),
            _ => {}
        }
    }

    fn submit_modal(&mut self) {
        let backend = Arc::clone(&self.backend);
        match self.modal.as_mut() {
            Some(Modal::CreateFolder(form)) => {
                if !form.can_submit() {
                    return;
                }
                form.state.begin();
                let request = form.request();
                self.spawn(async move {
                    Completion::FolderCreated(backend.create_folder(request).await)
                });
            }
            Some(Modal::AddContent(form)) => {
                if !form.can_submit() {
                    return;
                }
                form.state.begin();
                let request = form.request();
                let folder_id = request.folder_id.clone();
                self.spawn(async move {
                    Completion::ItemAdded(folder_id, backend.add_item(request).await)
                });
            }
            None => {}
        }
    }

    fn sign_in(&mut self) {
        if self.signing_in {
            return;
        }
        self.signing_in = true;
        self.login_error = None;
        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Completion::SignedIn(backend.sign_in().await) });
    }

    fn logout(&mut self) {
        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Completion::SignedOut(backend.sign_out().await) });
        self.session = None;
        self.folders.clear();
        self.folder_selection.clear();
        self.status = None;
        self.screen = Screen::Welcome;
    }

    pub fn reload_folders(&mut self) {
        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Completion::FoldersLoaded(backend.list_folders().await) });
    }

    pub fn open_folder(&mut self, folder_id: FolderId) {
        self.screen = Screen::Folder;
        self.active_folder_id = Some(folder_id.clone());
        self.active_folder = None;
        self.item_selection.clear();
        self.folder_view_mode = self.default_view;
        self.status = None;
        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = backend.folder_view(folder_id.clone()).await;
            Completion::FolderLoaded(folder_id, result)
        });
    }

    fn delete_selected_item(&mut self) {
        let Some((folder_id, item_id)) = self
            .selected_item()
            .map(|item| (item.folder_id.clone(), item.id.clone()))
        else {
            return;
        };
        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = backend.delete_item(folder_id.clone(), item_id.clone()).await;
            Completion::ItemDeleted(folder_id, item_id, result)
        });
    }

    fn copy_selected_link(&mut self) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        match clipboard::copy_link(&item) {
            Ok(()) => self.set_status(&format!("Copied {}", item.url), false),
            Err(e) => {
                tracing::error!("Failed to copy link: {}", e);
                self.set_status(&format!("Could not copy link: {}", e), true);
            }
        }
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    pub fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.session.is_none()
            && matches!(
                completion,
                Completion::FoldersLoaded(_) | Completion::FolderLoaded(..)
            )
        {
            tracing::debug!("Dropping folder data that arrived after sign-out");
            return;
        }
        match completion {
            Completion::SignedIn(Ok(session)) => {
                self.signing_in = false;
                self.login_error = None;
                self.session = Some(session);
                self.screen = Screen::Dashboard;
                self.reload_folders();
            }
            Completion::SignedIn(Err(e)) => {
                tracing::error!("Sign in failed: {}", e);
                self.signing_in = false;
                self.login_error = Some(failure_message(&e, "Enter"));
            }
            Completion::SignedOut(result) => {
                if let Err(e) = result {
                    tracing::error!("Sign out failed: {}", e);
                }
            }
            Completion::FoldersLoaded(Ok(folders)) => {
                self.folders = folders;
                self.folder_selection.clamp(self.folders.len());
            }
            Completion::FoldersLoaded(Err(e)) => {
                tracing::error!("Failed to load folders: {}", e);
                self.set_status(&failure_message(&e, "r"), true);
            }
            Completion::FolderCreated(Ok(folder)) => {
                self.set_status(&format!("Created folder {}", folder.name), false);
                self.folders.push(folder);
                self.folder_selection.jump_to_last(self.folders.len());
                if matches!(self.modal, Some(Modal::CreateFolder(_))) {
                    self.modal = None;
                }
            }
            Completion::FolderCreated(Err(e)) => {
                tracing::error!("Failed to create folder: {}", e);
                let message = failure_message(&e, "Enter");
                match self.modal.as_mut() {
                    Some(Modal::CreateFolder(form)) => form.state.fail(message),
                    _ => self.set_status(&message, true),
                }
            }
            Completion::FolderLoaded(folder_id, result) => {
                if self.active_folder_id.as_ref() != Some(&folder_id) {
                    return;
                }
                match result {
                    Ok(view) => {
                        self.item_selection.clamp(view.items.len());
                        self.active_folder = Some(view);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load folder {}: {}", folder_id, e);
                        self.active_folder = Some(FolderView::placeholder(folder_id));
                        self.set_status(&e.to_string(), true);
                    }
                }
            }
            Completion::ItemAdded(folder_id, Ok(item)) => {
                self.set_status(&format!("Saved {}", item.title), false);
                if let Some(view) = self.active_folder.as_mut().filter(|v| v.id == folder_id) {
                    view.items.push(item);
                    self.item_selection.jump_to_last(view.items.len());
                }
                if matches!(&self.modal, Some(Modal::AddContent(form)) if form.folder_id == folder_id)
                {
                    self.modal = None;
                }
                self.reload_folders();
            }
            Completion::ItemAdded(folder_id, Err(e)) => {
                tracing::error!("Failed to add item to folder {}: {}", folder_id, e);
                let message = failure_message(&e, "Enter");
                match self.modal.as_mut() {
                    Some(Modal::AddContent(form)) if form.folder_id == folder_id => {
                        form.state.fail(message)
                    }
                    _ => self.set_status(&message, true),
                }
            }
            Completion::ItemDeleted(folder_id, item_id, Ok(())) => {
                if let Some(view) = self.active_folder.as_mut().filter(|v| v.id == folder_id) {
                    view.items.retain(|item| item.id != item_id);
                    self.item_selection.clamp(view.items.len());
                }
                self.reload_folders();
            }
            Completion::ItemDeleted(_, item_id, Err(e)) => {
                tracing::error!("Failed to delete item {}: {}", item_id, e);
                self.set_status(&failure_message(&e, "d"), true);
            }
        }
    }

    pub async fn run(&mut self) -> VaultResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> VaultResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => self.handle_key(key),
                    Some(Event::Resize) | Some(Event::Tick) => {}
                    None => break,
                },
                Some(completion) = self.completion_rx.recv() => self.apply(completion),
            }
        }
        Ok(())
    }
}

fn failure_message(err: &VaultError, retry_key: &str) -> String {
    if err.is_retryable() {
        format!("{}. Press {} to retry.", err, retry_key)
    } else {
        err.to_string()
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
