use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::FolderId;
use crate::id::EntityId;

pub type ContentId = EntityId;

/// Thumbnail attached to newly saved items until real previews are fetched.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub folder_id: FolderId,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub date: DateTime<Utc>,
}

impl ContentItem {
    pub fn new(id: ContentId, folder_id: FolderId, fields: NewContent) -> Self {
        let description = fields
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            id,
            folder_id,
            title: fields.title.trim().to_string(),
            url: fields.url.trim().to_string(),
            description,
            thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
            date: Utc::now(),
        }
    }

    pub fn display_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// User-supplied fields of an item that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContent {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewContent {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description,
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_drops_blank_description() {
        let item = ContentItem::new(
            EntityId::from("7"),
            EntityId::from("1"),
            NewContent::new("  Title ", " https://x ", Some("   ".to_string())),
        );
        assert_eq!(item.title, "Title");
        assert_eq!(item.url, "https://x");
        assert_eq!(item.description, None);
        assert_eq!(item.thumbnail.as_deref(), Some(PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_submittable_requires_title_and_url() {
        assert!(NewContent::new("T", "https://x", None).is_submittable());
        assert!(!NewContent::new(" ", "https://x", None).is_submittable());
        assert!(!NewContent::new("T", "", None).is_submittable());
    }

    #[test]
    fn test_date_serializes_as_iso8601() {
        let item = ContentItem::new(
            EntityId::from("7"),
            EntityId::from("1"),
            NewContent::new("T", "https://x", None),
        );
        let json = serde_json::to_value(&item).unwrap();
        let date = json["date"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(date).is_ok());
    }
}
