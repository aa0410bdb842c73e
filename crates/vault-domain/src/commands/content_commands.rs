use super::{Command, CommandContext};
use crate::{ContentId, ContentItem, FolderId, NewContent};
use vault_core::{VaultError, VaultResult};

/// Save a new item at the end of a folder
pub struct AddContent {
    pub folder_id: FolderId,
    pub content: NewContent,
}

impl Command for AddContent {
    fn execute(&self, context: &mut CommandContext) -> VaultResult<()> {
        if self.content.title.trim().is_empty() {
            return Err(VaultError::validation("title is required"));
        }
        if self.content.url.trim().is_empty() {
            return Err(VaultError::validation("url is required"));
        }
        if !context.folders.iter().any(|f| f.id == self.folder_id) {
            return Err(VaultError::NotFound(format!("Folder {}", self.folder_id)));
        }

        let id = context.ids.next_id();
        let item = ContentItem::new(id, self.folder_id.clone(), self.content.clone());
        tracing::info!(
            "Saved '{}' to folder {} (id: {})",
            item.title,
            self.folder_id,
            item.id
        );
        context.items.push(item);
        context.refresh_item_count(&self.folder_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add '{}' to folder {}", self.content.title.trim(), self.folder_id)
    }
}

/// Remove an item from a folder; absent ids are ignored
pub struct DeleteContent {
    pub folder_id: FolderId,
    pub item_id: ContentId,
}

impl Command for DeleteContent {
    fn execute(&self, context: &mut CommandContext) -> VaultResult<()> {
        let before = context.items.len();
        context
            .items
            .retain(|item| !(item.folder_id == self.folder_id && item.id == self.item_id));
        if context.items.len() == before {
            tracing::debug!(
                "Delete of unknown item {} in folder {} ignored",
                self.item_id,
                self.folder_id
            );
        } else {
            context.refresh_item_count(&self.folder_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete item {} from folder {}", self.item_id, self.folder_id)
    }
}
