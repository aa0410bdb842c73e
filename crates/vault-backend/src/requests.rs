use serde::{Deserialize, Serialize};
use vault_core::VaultResult;
use vault_domain::{ContentId, ContentItem, Folder, FolderIcon, FolderId, NewContent};

use crate::traits::VaultBackend;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(default)]
    pub icon: FolderIcon,
}

impl CreateFolderRequest {
    pub fn new(name: impl Into<String>, icon: FolderIcon) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub folder_id: FolderId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl AddItemRequest {
    pub fn content(&self) -> NewContent {
        NewContent::new(self.title.clone(), self.url.clone(), self.description.clone())
    }
}

/// One call against a backend, as it travels over a batch stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum VaultRequest {
    ListFolders,
    CreateFolder(CreateFolderRequest),
    DeleteFolder {
        folder_id: FolderId,
    },
    ListItems {
        folder_id: FolderId,
    },
    AddItem(AddItemRequest),
    DeleteItem {
        folder_id: FolderId,
        item_id: ContentId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VaultResponse {
    Folders(Vec<Folder>),
    Folder(Folder),
    Items(Vec<ContentItem>),
    Item(ContentItem),
    Deleted { deleted: String },
}

pub async fn execute_request(
    backend: &dyn VaultBackend,
    request: VaultRequest,
) -> VaultResult<VaultResponse> {
    let response = match request {
        VaultRequest::ListFolders => VaultResponse::Folders(backend.list_folders().await?),
        VaultRequest::CreateFolder(req) => VaultResponse::Folder(backend.create_folder(req).await?),
        VaultRequest::DeleteFolder { folder_id } => {
            let deleted = folder_id.to_string();
            backend.delete_folder(folder_id).await?;
            VaultResponse::Deleted { deleted }
        }
        VaultRequest::ListItems { folder_id } => {
            VaultResponse::Items(backend.list_items(folder_id).await?)
        }
        VaultRequest::AddItem(req) => VaultResponse::Item(backend.add_item(req).await?),
        VaultRequest::DeleteItem { folder_id, item_id } => {
            let deleted = item_id.to_string();
            backend.delete_item(folder_id, item_id).await?;
            VaultResponse::Deleted { deleted }
        }
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tagged_requests() {
        let req: VaultRequest =
            serde_json::from_str(r#"{"op":"create_folder","name":"Recipes","icon":"restaurant-outline"}"#)
                .unwrap();
        assert_eq!(
            req,
            VaultRequest::CreateFolder(CreateFolderRequest::new("Recipes", FolderIcon::Restaurant))
        );

        let req: VaultRequest =
            serde_json::from_str(r#"{"op":"delete_item","folder_id":"1","item_id":"101"}"#).unwrap();
        assert_eq!(
            req,
            VaultRequest::DeleteItem {
                folder_id: FolderId::from("1"),
                item_id: ContentId::from("101"),
            }
        );
    }

    #[test]
    fn test_icon_defaults_to_folder() {
        let req: VaultRequest = serde_json::from_str(r#"{"op":"create_folder","name":"Misc"}"#).unwrap();
        match req {
            VaultRequest::CreateFolder(create) => assert_eq!(create.icon, FolderIcon::Folder),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        assert!(serde_json::from_str::<VaultRequest>(r#"{"op":"rename_folder"}"#).is_err());
    }
}
