use chrono::Utc;
use std::collections::HashSet;
use vault_core::VaultError;
use vault_domain::commands::*;
use vault_domain::*;

fn empty_store() -> VaultStore {
    VaultStore::new().with_color_policy(CyclingColorPolicy::default())
}

#[test]
fn test_created_folder_ids_are_distinct() {
    let mut store = empty_store();
    let ids: HashSet<FolderId> = (0..200)
        .map(|i| {
            store
                .create_folder(format!("Folder {}", i), FolderIcon::Folder)
                .unwrap()
                .id
        })
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_blank_folder_names_leave_collection_unchanged() {
    let mut store = VaultStore::seeded();
    let before = store.list_folders().unwrap();

    assert!(matches!(
        store.create_folder(String::new(), FolderIcon::Folder),
        Err(VaultError::Validation(_))
    ));
    assert!(matches!(
        store.create_folder("   ".to_string(), FolderIcon::Folder),
        Err(VaultError::Validation(_))
    ));

    assert_eq!(store.list_folders().unwrap(), before);
}

#[test]
fn test_add_item_appends_with_matching_fields() {
    let mut store = VaultStore::seeded();
    let folder_id = FolderId::from("2");
    let before = store.list_items(&folder_id).unwrap().len();
    let called_at = Utc::now();

    let item = store
        .add_item(
            &folder_id,
            NewContent::new("T", "https://x", Some("d".to_string())),
        )
        .unwrap();

    let items = store.list_items(&folder_id).unwrap();
    assert_eq!(items.len(), before + 1);
    let last = items.last().unwrap();
    assert_eq!(last, &item);
    assert_eq!(last.title, "T");
    assert_eq!(last.url, "https://x");
    assert_eq!(last.description.as_deref(), Some("d"));
    assert!(last.date >= called_at);
}

#[test]
fn test_add_item_validates_title_and_url() {
    let mut store = VaultStore::seeded();
    let folder_id = FolderId::from("1");

    for content in [
        NewContent::new("", "https://x", None),
        NewContent::new("T", "  ", None),
        NewContent::new(" ", "", Some("d".to_string())),
    ] {
        assert!(matches!(
            store.add_item(&folder_id, content),
            Err(VaultError::Validation(_))
        ));
    }
    assert_eq!(store.list_items(&folder_id).unwrap().len(), 2);
}

#[test]
fn test_add_item_to_unknown_folder_is_not_found() {
    let mut store = VaultStore::seeded();
    let result = store.add_item(
        &FolderId::from("missing"),
        NewContent::new("T", "https://x", None),
    );
    assert!(matches!(result, Err(VaultError::NotFound(_))));
}

#[test]
fn test_delete_item_twice_is_idempotent() {
    let mut store = VaultStore::seeded();
    let folder_id = FolderId::from("1");
    let item_id = ContentId::from("101");

    store.delete_item(&folder_id, &item_id).unwrap();
    let after_first = store.list_items(&folder_id).unwrap();
    store.delete_item(&folder_id, &item_id).unwrap();
    let after_second = store.list_items(&folder_id).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(after_second.len(), 1);
}

#[test]
fn test_list_items_of_unknown_folder_is_empty() {
    let store = VaultStore::seeded();
    assert!(store.list_items(&FolderId::from("never")).unwrap().is_empty());
}

#[test]
fn test_recipes_scenario() {
    let mut store = empty_store();
    let folder = store
        .create_folder("Recipes".to_string(), "restaurant-outline".parse().unwrap())
        .unwrap();
    assert_eq!(folder.item_count, 0);
    assert_eq!(folder.icon, FolderIcon::Restaurant);

    let first = store
        .add_item(&folder.id, NewContent::new("Carbonara", "https://a", None))
        .unwrap();
    let second = store
        .add_item(&folder.id, NewContent::new("Curry", "https://b", None))
        .unwrap();

    let items = store.list_items(&folder.id).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    store.delete_item(&folder.id, &first.id).unwrap();
    let items = store.list_items(&folder.id).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, second.id);
}

#[test]
fn test_delete_folder_cascades_to_items() {
    let mut store = VaultStore::seeded();
    let recipes = FolderId::from("1");

    store.delete_folder(&recipes).unwrap();

    assert!(store.get_folder(&recipes).unwrap().is_none());
    assert!(store.list_items(&recipes).unwrap().is_empty());
    assert_eq!(store.list_folders().unwrap().len(), 4);

    // absent folder is a no-op
    store.delete_folder(&recipes).unwrap();
    assert_eq!(store.list_folders().unwrap().len(), 4);
}

#[test]
fn test_commands_run_against_raw_context() {
    let mut folders = vec![];
    let mut items = vec![];
    let mut ids = IdGenerator::with_clock(|| 42);
    let colors = FixedColorPolicy(FolderColor::Pink);

    let mut ctx = CommandContext {
        folders: &mut folders,
        items: &mut items,
        ids: &mut ids,
        colors: &colors,
    };
    CreateFolder {
        name: "Reading".to_string(),
        icon: FolderIcon::Bookmark,
    }
    .execute(&mut ctx)
    .unwrap();
    let folder_id = ctx.folders[0].id.clone();
    AddContent {
        folder_id: folder_id.clone(),
        content: NewContent::new("Essay", "https://essay", None),
    }
    .execute(&mut ctx)
    .unwrap();

    assert_eq!(folders[0].id.as_str(), "42");
    assert_eq!(folders[0].color, FolderColor::Pink);
    assert_eq!(folders[0].item_count, 1);
    assert_eq!(items[0].id.as_str(), "43");
}
