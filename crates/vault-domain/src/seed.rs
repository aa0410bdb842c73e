//! Sample folders shown on first launch.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{ContentItem, EntityId, Folder, FolderColor, FolderIcon};

struct SeedFolder {
    id: &'static str,
    name: &'static str,
    icon: FolderIcon,
    color: FolderColor,
}

struct SeedItem {
    id: &'static str,
    folder_id: &'static str,
    title: &'static str,
    url: &'static str,
    description: &'static str,
    thumbnail: &'static str,
    date: (i32, u32, u32),
}

const FOLDERS: [SeedFolder; 5] = [
    SeedFolder {
        id: "1",
        name: "Recipes",
        icon: FolderIcon::Restaurant,
        color: FolderColor::Rose,
    },
    SeedFolder {
        id: "2",
        name: "Travel",
        icon: FolderIcon::Travel,
        color: FolderColor::Blue,
    },
    SeedFolder {
        id: "3",
        name: "Articles",
        icon: FolderIcon::Document,
        color: FolderColor::Green,
    },
    SeedFolder {
        id: "4",
        name: "Videos",
        icon: FolderIcon::Video,
        color: FolderColor::Yellow,
    },
    SeedFolder {
        id: "5",
        name: "Shopping",
        icon: FolderIcon::Cart,
        color: FolderColor::Purple,
    },
];

const ITEMS: [SeedItem; 2] = [
    SeedItem {
        id: "101",
        folder_id: "1",
        title: "Pasta Carbonara Recipe",
        url: "https://example.com/pasta",
        description: "Authentic Italian pasta carbonara recipe with eggs and pancetta",
        thumbnail: "https://images.unsplash.com/photo-1546549032-9571cd6b27df",
        date: (2024, 5, 1),
    },
    SeedItem {
        id: "102",
        folder_id: "1",
        title: "Easy Chicken Curry",
        url: "https://example.com/curry",
        description: "Quick and simple chicken curry for weeknight dinners",
        thumbnail: "https://images.unsplash.com/photo-1565557623262-b51c2513a641",
        date: (2024, 5, 2),
    },
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Sample folders and items; counts are left for the store to derive.
pub fn sample_data() -> (Vec<Folder>, Vec<ContentItem>) {
    let folders = FOLDERS
        .iter()
        .map(|seed| Folder {
            id: EntityId::from(seed.id),
            name: seed.name.to_string(),
            icon: seed.icon,
            color: seed.color,
            item_count: 0,
            created_at: midnight_utc((2024, 5, 1)),
        })
        .collect();

    let items = ITEMS
        .iter()
        .map(|seed| ContentItem {
            id: EntityId::from(seed.id),
            folder_id: EntityId::from(seed.folder_id),
            title: seed.title.to_string(),
            url: seed.url.to_string(),
            description: Some(seed.description.to_string()),
            thumbnail: Some(seed.thumbnail.to_string()),
            date: midnight_utc(seed.date),
        })
        .collect();

    (folders, items)
}
