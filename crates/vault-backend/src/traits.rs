use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vault_core::VaultResult;
use vault_domain::{ContentId, ContentItem, Folder, FolderId, FolderView};

use crate::requests::{AddItemRequest, CreateFolderRequest};

/// Identity returned by a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity provider the user signed in with
    pub provider: String,
    pub display_name: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Request/response surface between the UI and wherever folders live.
///
/// Every call may fail independently. A failed call must leave the
/// underlying collections exactly as they were.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait VaultBackend: Send + Sync {
    /// Authenticate the current user
    async fn sign_in(&self) -> VaultResult<Session>;

    async fn sign_out(&self) -> VaultResult<()>;

    /// All folders in creation order
    async fn list_folders(&self) -> VaultResult<Vec<Folder>>;

    async fn create_folder(&self, request: CreateFolderRequest) -> VaultResult<Folder>;

    /// Cascades to every item in the folder; unknown ids are ignored
    async fn delete_folder(&self, folder_id: FolderId) -> VaultResult<()>;

    /// Items of a folder in insertion order; empty for unknown folders
    async fn list_items(&self, folder_id: FolderId) -> VaultResult<Vec<ContentItem>>;

    /// A folder and its items, or the placeholder for unknown ids
    async fn folder_view(&self, folder_id: FolderId) -> VaultResult<FolderView>;

    /// Fails with `NotFound` when the folder does not exist, and with
    /// `Validation` when the title or url is blank
    async fn add_item(&self, request: AddItemRequest) -> VaultResult<ContentItem>;

    /// Unknown item ids are ignored
    async fn delete_item(&self, folder_id: FolderId, item_id: ContentId) -> VaultResult<()>;
}
