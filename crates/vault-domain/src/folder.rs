use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::id::EntityId;

pub type FolderId = EntityId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderIcon {
    #[default]
    #[serde(rename = "folder-outline")]
    Folder,
    #[serde(rename = "airplane-outline")]
    Travel,
    #[serde(rename = "home-outline")]
    Home,
    #[serde(rename = "happy-outline")]
    Fun,
    #[serde(rename = "document-text-outline")]
    Document,
    #[serde(rename = "image-outline")]
    Image,
    #[serde(rename = "videocam-outline")]
    Video,
    #[serde(rename = "musical-notes-outline")]
    Music,
    #[serde(rename = "code-slash-outline")]
    Code,
    #[serde(rename = "link-outline")]
    Link,
    #[serde(rename = "star-outline")]
    Star,
    #[serde(rename = "heart-outline")]
    Heart,
    #[serde(rename = "bookmark-outline")]
    Bookmark,
    #[serde(rename = "pricetag-outline")]
    Tag,
    #[serde(rename = "calendar-outline")]
    Calendar,
    #[serde(rename = "settings-outline")]
    Settings,
    #[serde(rename = "archive-outline")]
    Archive,
    // Only used by the bundled sample folders; not offered by the icon picker.
    #[serde(rename = "restaurant-outline")]
    Restaurant,
    #[serde(rename = "cart-outline")]
    Cart,
}

impl FolderIcon {
    /// Icons a user can choose from when creating a folder, in picker order.
    pub const PICKER: [FolderIcon; 17] = [
        FolderIcon::Folder,
        FolderIcon::Travel,
        FolderIcon::Home,
        FolderIcon::Fun,
        FolderIcon::Document,
        FolderIcon::Image,
        FolderIcon::Video,
        FolderIcon::Music,
        FolderIcon::Code,
        FolderIcon::Link,
        FolderIcon::Star,
        FolderIcon::Heart,
        FolderIcon::Bookmark,
        FolderIcon::Tag,
        FolderIcon::Calendar,
        FolderIcon::Settings,
        FolderIcon::Archive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FolderIcon::Folder => "folder-outline",
            FolderIcon::Travel => "airplane-outline",
            FolderIcon::Home => "home-outline",
            FolderIcon::Fun => "happy-outline",
            FolderIcon::Document => "document-text-outline",
            FolderIcon::Image => "image-outline",
            FolderIcon::Video => "videocam-outline",
            FolderIcon::Music => "musical-notes-outline",
            FolderIcon::Code => "code-slash-outline",
            FolderIcon::Link => "link-outline",
            FolderIcon::Star => "star-outline",
            FolderIcon::Heart => "heart-outline",
            FolderIcon::Bookmark => "bookmark-outline",
            FolderIcon::Tag => "pricetag-outline",
            FolderIcon::Calendar => "calendar-outline",
            FolderIcon::Settings => "settings-outline",
            FolderIcon::Archive => "archive-outline",
            FolderIcon::Restaurant => "restaurant-outline",
            FolderIcon::Cart => "cart-outline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FolderIcon::Folder => "Folder",
            FolderIcon::Travel => "Travel",
            FolderIcon::Home => "Home",
            FolderIcon::Fun => "Fun",
            FolderIcon::Document => "Document",
            FolderIcon::Image => "Image",
            FolderIcon::Video => "Video",
            FolderIcon::Music => "Music",
            FolderIcon::Code => "Code",
            FolderIcon::Link => "Link",
            FolderIcon::Star => "Star",
            FolderIcon::Heart => "Heart",
            FolderIcon::Bookmark => "Bookmark",
            FolderIcon::Tag => "Tag",
            FolderIcon::Calendar => "Calendar",
            FolderIcon::Settings => "Settings",
            FolderIcon::Archive => "Archive",
            FolderIcon::Restaurant => "Restaurant",
            FolderIcon::Cart => "Shopping",
        }
    }

    /// Single-cell glyph drawn in place of the vector icon.
    pub fn glyph(self) -> char {
        match self {
            FolderIcon::Folder => '▤',
            FolderIcon::Travel => '✈',
            FolderIcon::Home => '⌂',
            FolderIcon::Fun => '☺',
            FolderIcon::Document => '≡',
            FolderIcon::Image => '▣',
            FolderIcon::Video => '▶',
            FolderIcon::Music => '♫',
            FolderIcon::Code => '⟨',
            FolderIcon::Link => '∞',
            FolderIcon::Star => '★',
            FolderIcon::Heart => '♥',
            FolderIcon::Bookmark => '⚑',
            FolderIcon::Tag => '◆',
            FolderIcon::Calendar => '▦',
            FolderIcon::Settings => '⚙',
            FolderIcon::Archive => '▥',
            FolderIcon::Restaurant => '♨',
            FolderIcon::Cart => '⊔',
        }
    }

    fn all() -> impl Iterator<Item = FolderIcon> {
        Self::PICKER
            .into_iter()
            .chain([FolderIcon::Restaurant, FolderIcon::Cart])
    }
}

impl fmt::Display for FolderIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FolderIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| format!("unknown icon '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderColor {
    #[serde(rename = "#fee2e2")]
    Rose,
    #[serde(rename = "#dbeafe")]
    Blue,
    #[serde(rename = "#dcfce7")]
    Green,
    #[serde(rename = "#fef9c3")]
    Yellow,
    #[serde(rename = "#f3e8ff")]
    Purple,
    #[serde(rename = "#fce7f3")]
    Pink,
    /// Shown for folder ids that do not resolve; never assigned to a real folder.
    #[serde(rename = "#e5e7eb")]
    Neutral,
}

impl FolderColor {
    pub const PALETTE: [FolderColor; 6] = [
        FolderColor::Rose,
        FolderColor::Blue,
        FolderColor::Green,
        FolderColor::Yellow,
        FolderColor::Purple,
        FolderColor::Pink,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            FolderColor::Rose => "#fee2e2",
            FolderColor::Blue => "#dbeafe",
            FolderColor::Green => "#dcfce7",
            FolderColor::Yellow => "#fef9c3",
            FolderColor::Purple => "#f3e8ff",
            FolderColor::Pink => "#fce7f3",
            FolderColor::Neutral => "#e5e7eb",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub icon: FolderIcon,
    pub color: FolderColor,
    /// Number of items currently in the folder, kept in step by the store.
    #[serde(default)]
    pub item_count: usize,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(id: FolderId, name: String, icon: FolderIcon, color: FolderColor) -> Self {
        Self {
            id,
            name,
            icon,
            color,
            item_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn item_count_label(&self) -> String {
        item_count_label(self.item_count)
    }
}

pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
