use serde::Serialize;

use crate::{item_count_label, ContentItem, Folder, FolderColor, FolderIcon, FolderId};

pub const UNKNOWN_FOLDER_NAME: &str = "Unknown Folder";

/// A folder resolved for display together with its items.
///
/// Ids that do not resolve produce an empty placeholder instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderView {
    pub id: FolderId,
    pub name: String,
    pub icon: FolderIcon,
    pub color: FolderColor,
    pub items: Vec<ContentItem>,
    pub known: bool,
}

impl FolderView {
    pub fn resolved(folder: &Folder, items: Vec<ContentItem>) -> Self {
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
            icon: folder.icon,
            color: folder.color,
            items,
            known: true,
        }
    }

    pub fn placeholder(id: FolderId) -> Self {
        Self {
            id,
            name: UNKNOWN_FOLDER_NAME.to_string(),
            icon: FolderIcon::Folder,
            color: FolderColor::Neutral,
            items: Vec::new(),
            known: false,
        }
    }

    pub fn item_count_label(&self) -> String {
        item_count_label(self.items.len())
    }
}
