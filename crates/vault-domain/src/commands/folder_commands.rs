use super::{Command, CommandContext};
use crate::{Folder, FolderIcon, FolderId};
use vault_core::{VaultError, VaultResult};

/// Append a new, empty folder
pub struct CreateFolder {
    pub name: String,
    pub icon: FolderIcon,
}

impl Command for CreateFolder {
    fn execute(&self, context: &mut CommandContext) -> VaultResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(VaultError::validation("folder name is required"));
        }
        let id = context.ids.next_id();
        let folder = Folder::new(id, name.to_string(), self.icon, context.colors.pick());
        tracing::info!("Created folder: {} (id: {})", folder.name, folder.id);
        context.folders.push(folder);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create folder: '{}'", self.name.trim())
    }
}

/// Remove a folder together with every item it holds
pub struct DeleteFolder {
    pub folder_id: FolderId,
}

impl Command for DeleteFolder {
    fn execute(&self, context: &mut CommandContext) -> VaultResult<()> {
        let before = context.folders.len();
        context.folders.retain(|f| f.id != self.folder_id);
        if context.folders.len() == before {
            tracing::debug!("Delete of unknown folder {} ignored", self.folder_id);
            return Ok(());
        }
        let items_before = context.items.len();
        context.items.retain(|item| item.folder_id != self.folder_id);
        tracing::info!(
            "Deleted folder {} and {} item(s)",
            self.folder_id,
            items_before - context.items.len()
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete folder {}", self.folder_id)
    }
}
