use std::time::Duration;
use tokio::time::Instant;
use vault_backend::*;
use vault_core::VaultError;
use vault_domain::{FolderIcon, FolderId, VaultStore};

fn instant_backend() -> SimulatedBackend {
    SimulatedBackend::new(VaultStore::seeded(), LatencyProfile::none())
}

#[tokio::test(start_paused = true)]
async fn test_create_folder_waits_for_configured_latency() {
    let backend = SimulatedBackend::new(VaultStore::new(), LatencyProfile::default());
    let started = Instant::now();

    let folder = backend
        .create_folder(CreateFolderRequest::new("Recipes", FolderIcon::Restaurant))
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(500));
    assert_eq!(folder.item_count, 0);
    assert_eq!(backend.list_folders().await.unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sign_in_records_session() {
    let backend = SimulatedBackend::new(VaultStore::new(), LatencyProfile::default());
    let started = Instant::now();

    let session = backend.sign_in().await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(session.provider, "google");
    assert_eq!(backend.session().await, Some(session));

    backend.sign_out().await.unwrap();
    assert_eq!(backend.session().await, None);
}

#[tokio::test]
async fn test_injected_network_failure_leaves_store_unchanged() {
    let backend = instant_backend();
    let before = backend.list_folders().await.unwrap();
    backend
        .faults()
        .fail_next(OperationKind::CreateFolder, Fault::Network, 1);

    let err = backend
        .create_folder(CreateFolderRequest::new("Travel 2", FolderIcon::Travel))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(backend.list_folders().await.unwrap(), before);

    // the retry goes through exactly once
    backend
        .create_folder(CreateFolderRequest::new("Travel 2", FolderIcon::Travel))
        .await
        .unwrap();
    let after = backend.list_folders().await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.iter().filter(|f| f.name == "Travel 2").count(), 1);
}

#[tokio::test]
async fn test_failed_add_item_keeps_items() {
    let backend = instant_backend();
    let recipes = FolderId::from("1");
    backend
        .faults()
        .fail_next(OperationKind::AddItem, Fault::Timeout, 1);

    let result = backend
        .add_item(AddItemRequest {
            folder_id: recipes.clone(),
            title: "Risotto".to_string(),
            url: "https://example.com/risotto".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(result, Err(VaultError::Timeout(_))));
    assert_eq!(backend.list_items(recipes).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_validation_passes_through_backend() {
    let backend = instant_backend();
    let err = backend
        .create_folder(CreateFolderRequest::new("   ", FolderIcon::Folder))
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::Validation(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_execute_request_round_trip() {
    let backend = instant_backend();

    let response = execute_request(
        &backend,
        VaultRequest::ListItems {
            folder_id: FolderId::from("1"),
        },
    )
    .await
    .unwrap();
    match response {
        VaultResponse::Items(items) => assert_eq!(items.len(), 2),
        other => panic!("unexpected response {:?}", other),
    }

    let response = execute_request(
        &backend,
        VaultRequest::DeleteItem {
            folder_id: FolderId::from("1"),
            item_id: "101".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        response,
        VaultResponse::Deleted {
            deleted: "101".to_string()
        }
    );
}

#[tokio::test]
async fn test_folder_view_of_unknown_id_is_placeholder() {
    let backend = instant_backend();
    let view = backend.folder_view(FolderId::from("42")).await.unwrap();
    assert!(!view.known);
    assert_eq!(view.name, "Unknown Folder");
}
