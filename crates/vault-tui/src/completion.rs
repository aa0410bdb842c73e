use vault_backend::Session;
use vault_core::VaultResult;
use vault_domain::{ContentId, ContentItem, Folder, FolderId, FolderView};

/// Result of a backend call, delivered back to the event loop.
#[derive(Debug)]
pub enum Completion {
    SignedIn(VaultResult<Session>),
    SignedOut(VaultResult<()>),
    FoldersLoaded(VaultResult<Vec<Folder>>),
    FolderCreated(VaultResult<Folder>),
    FolderLoaded(FolderId, VaultResult<FolderView>),
    ItemAdded(FolderId, VaultResult<ContentItem>),
    ItemDeleted(FolderId, ContentId, VaultResult<()>),
}
