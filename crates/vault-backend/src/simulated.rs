use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use vault_core::{AppConfig, VaultResult};
use vault_domain::{
    ContentId, ContentItem, Folder, FolderId, FolderView, VaultOperations, VaultStore,
};

use crate::fault::{FaultPlan, OperationKind};
use crate::latency::LatencyProfile;
use crate::requests::{AddItemRequest, CreateFolderRequest};
use crate::traits::{Session, VaultBackend};

/// In-process stand-in for a remote service.
///
/// Each call waits out its configured latency, then either consumes a
/// queued fault or applies the operation to the wrapped store. Faults fire
/// before the store is touched, so a failed call never changes state.
pub struct SimulatedBackend {
    store: Mutex<VaultStore>,
    latency: LatencyProfile,
    faults: FaultPlan,
    session: Mutex<Option<Session>>,
}

impl SimulatedBackend {
    pub fn new(store: VaultStore, latency: LatencyProfile) -> Self {
        Self {
            store: Mutex::new(store),
            latency,
            faults: FaultPlan::new(),
            session: Mutex::new(None),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store = if config.effective_seed_mock_data() {
            VaultStore::seeded()
        } else {
            VaultStore::new()
        };
        Self::new(store, LatencyProfile::from_config(config))
    }

    pub fn faults(&self) -> &FaultPlan {
        &self.faults
    }

    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    async fn round_trip(&self, kind: OperationKind) -> VaultResult<()> {
        let delay = self.latency.for_operation(kind);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match self.faults.take(kind) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VaultBackend for SimulatedBackend {
    async fn sign_in(&self) -> VaultResult<Session> {
        self.round_trip(OperationKind::SignIn).await?;
        let session = Session {
            provider: "google".to_string(),
            display_name: "Guest".to_string(),
            signed_in_at: Utc::now(),
        };
        *self.session.lock().await = Some(session.clone());
        tracing::info!("Signed in via {}", session.provider);
        Ok(session)
    }

    async fn sign_out(&self) -> VaultResult<()> {
        self.round_trip(OperationKind::SignOut).await?;
        *self.session.lock().await = None;
        tracing::info!("Signed out");
        Ok(())
    }

    async fn list_folders(&self) -> VaultResult<Vec<Folder>> {
        self.round_trip(OperationKind::ListFolders).await?;
        self.store.lock().await.list_folders()
    }

    async fn create_folder(&self, request: CreateFolderRequest) -> VaultResult<Folder> {
        self.round_trip(OperationKind::CreateFolder).await?;
        self.store
            .lock()
            .await
            .create_folder(request.name, request.icon)
    }

    async fn delete_folder(&self, folder_id: FolderId) -> VaultResult<()> {
        self.round_trip(OperationKind::DeleteFolder).await?;
        self.store.lock().await.delete_folder(&folder_id)
    }

    async fn list_items(&self, folder_id: FolderId) -> VaultResult<Vec<ContentItem>> {
        self.round_trip(OperationKind::ListItems).await?;
        self.store.lock().await.list_items(&folder_id)
    }

    async fn folder_view(&self, folder_id: FolderId) -> VaultResult<FolderView> {
        self.round_trip(OperationKind::ListItems).await?;
        self.store.lock().await.folder_view(&folder_id)
    }

    async fn add_item(&self, request: AddItemRequest) -> VaultResult<ContentItem> {
        self.round_trip(OperationKind::AddItem).await?;
        let content = request.content();
        self.store.lock().await.add_item(&request.folder_id, content)
    }

    async fn delete_item(&self, folder_id: FolderId, item_id: ContentId) -> VaultResult<()> {
        self.round_trip(OperationKind::DeleteItem).await?;
        self.store.lock().await.delete_item(&folder_id, &item_id)
    }
}
