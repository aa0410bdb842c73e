use vault_core::VaultResult;

pub mod content_commands;
pub mod folder_commands;

pub use content_commands::*;
pub use folder_commands::*;

use crate::{ColorPolicy, ContentItem, Folder, FolderId, IdGenerator};

/// Trait for domain commands that mutate state
/// Commands represent intent and either apply completely or leave state untouched
pub trait Command: Send + Sync {
    /// Execute this command, mutating the domain state
    fn execute(&self, context: &mut CommandContext) -> VaultResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub folders: &'a mut Vec<Folder>,
    pub items: &'a mut Vec<ContentItem>,
    pub ids: &'a mut IdGenerator,
    pub colors: &'a dyn ColorPolicy,
}

impl CommandContext<'_> {
    /// Re-derives a folder's item count from the item collection.
    pub(crate) fn refresh_item_count(&mut self, folder_id: &FolderId) {
        let count = self
            .items
            .iter()
            .filter(|item| &item.folder_id == folder_id)
            .count();
        if let Some(folder) = self.folders.iter_mut().find(|f| &f.id == folder_id) {
            folder.item_count = count;
        }
    }
}
