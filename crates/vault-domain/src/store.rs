use crate::commands::{
    AddContent, Command, CommandContext, CreateFolder, DeleteContent, DeleteFolder,
};
use crate::{
    seed, ColorPolicy, ContentId, ContentItem, Folder, FolderIcon, FolderId, FolderView,
    IdGenerator, NewContent, RandomColorPolicy, VaultOperations,
};
use vault_core::{VaultError, VaultResult};

/// In-memory folders and their items.
///
/// All mutation goes through [`Command`]s so that validation, id uniqueness
/// and derived item counts are enforced in one place.
pub struct VaultStore {
    folders: Vec<Folder>,
    items: Vec<ContentItem>,
    ids: IdGenerator,
    colors: Box<dyn ColorPolicy>,
}

impl VaultStore {
    pub fn new() -> Self {
        Self {
            folders: Vec::new(),
            items: Vec::new(),
            ids: IdGenerator::new(),
            colors: Box::new(RandomColorPolicy),
        }
    }

    /// A store pre-filled with the sample folders.
    pub fn seeded() -> Self {
        let (folders, items) = seed::sample_data();
        let mut store = Self::new();
        for id in folders.iter().map(|f| &f.id).chain(items.iter().map(|i| &i.id)) {
            store.ids.observe(id);
        }
        store.folders = folders;
        store.items = items;
        let ids: Vec<FolderId> = store.folders.iter().map(|f| f.id.clone()).collect();
        let mut ctx = store.context();
        for id in &ids {
            ctx.refresh_item_count(id);
        }
        store
    }

    pub fn with_color_policy(mut self, policy: impl ColorPolicy + 'static) -> Self {
        self.colors = Box::new(policy);
        self
    }

    pub fn with_id_generator(mut self, mut ids: IdGenerator) -> Self {
        for id in self
            .folders
            .iter()
            .map(|f| &f.id)
            .chain(self.items.iter().map(|i| &i.id))
        {
            ids.observe(id);
        }
        self.ids = ids;
        self
    }

    pub fn execute(&mut self, command: &dyn Command) -> VaultResult<()> {
        tracing::debug!("Executing: {}", command.description());
        let mut ctx = self.context();
        command.execute(&mut ctx)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    fn context(&mut self) -> CommandContext<'_> {
        CommandContext {
            folders: &mut self.folders,
            items: &mut self.items,
            ids: &mut self.ids,
            colors: self.colors.as_ref(),
        }
    }
}

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultOperations for VaultStore {
    fn list_folders(&self) -> VaultResult<Vec<Folder>> {
        Ok(self.folders.clone())
    }

    fn get_folder(&self, id: &FolderId) -> VaultResult<Option<Folder>> {
        Ok(self.folders.iter().find(|f| &f.id == id).cloned())
    }

    fn create_folder(&mut self, name: String, icon: FolderIcon) -> VaultResult<Folder> {
        self.execute(&CreateFolder { name, icon })?;
        self.folders.last().cloned().ok_or_else(|| {
            VaultError::Internal("Folder creation succeeded but folder not found".into())
        })
    }

    fn delete_folder(&mut self, id: &FolderId) -> VaultResult<()> {
        self.execute(&DeleteFolder {
            folder_id: id.clone(),
        })
    }

    fn list_items(&self, folder_id: &FolderId) -> VaultResult<Vec<ContentItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| &item.folder_id == folder_id)
            .cloned()
            .collect())
    }

    fn add_item(&mut self, folder_id: &FolderId, content: NewContent) -> VaultResult<ContentItem> {
        self.execute(&AddContent {
            folder_id: folder_id.clone(),
            content,
        })?;
        self.items.last().cloned().ok_or_else(|| {
            VaultError::Internal("Item creation succeeded but item not found".into())
        })
    }

    fn delete_item(&mut self, folder_id: &FolderId, item_id: &ContentId) -> VaultResult<()> {
        self.execute(&DeleteContent {
            folder_id: folder_id.clone(),
            item_id: item_id.clone(),
        })
    }

    fn folder_view(&self, folder_id: &FolderId) -> VaultResult<FolderView> {
        match self.get_folder(folder_id)? {
            Some(folder) => Ok(FolderView::resolved(&folder, self.list_items(folder_id)?)),
            None => Ok(FolderView::placeholder(folder_id.clone())),
        }
    }
}
