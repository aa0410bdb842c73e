use crate::{ContentId, ContentItem, Folder, FolderIcon, FolderId, FolderView, NewContent};
use vault_core::VaultResult;

/// The folder and content contract every front end goes through.
/// Adding a method here forces the store and any backend facade to add it.
pub trait VaultOperations {
    // Folder operations
    fn list_folders(&self) -> VaultResult<Vec<Folder>>;
    fn get_folder(&self, id: &FolderId) -> VaultResult<Option<Folder>>;
    fn create_folder(&mut self, name: String, icon: FolderIcon) -> VaultResult<Folder>;
    fn delete_folder(&mut self, id: &FolderId) -> VaultResult<()>;

    // Content operations
    fn list_items(&self, folder_id: &FolderId) -> VaultResult<Vec<ContentItem>>;
    fn add_item(&mut self, folder_id: &FolderId, content: NewContent) -> VaultResult<ContentItem>;
    fn delete_item(&mut self, folder_id: &FolderId, item_id: &ContentId) -> VaultResult<()>;

    // Display helpers
    fn folder_view(&self, folder_id: &FolderId) -> VaultResult<FolderView>;
}
