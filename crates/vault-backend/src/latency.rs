use std::time::Duration;
use vault_core::AppConfig;

use crate::fault::OperationKind;

/// Artificial delay applied before each kind of call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub sign_in: Duration,
    pub create: Duration,
    pub read: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self {
            sign_in: Duration::ZERO,
            create: Duration::ZERO,
            read: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            sign_in: Duration::from_millis(config.effective_sign_in_latency_ms()),
            create: Duration::from_millis(config.effective_create_latency_ms()),
            ..Self::none()
        }
    }

    pub fn with_create(mut self, delay: Duration) -> Self {
        self.create = delay;
        self
    }

    pub fn for_operation(&self, kind: OperationKind) -> Duration {
        match kind {
            OperationKind::SignIn => self.sign_in,
            OperationKind::CreateFolder | OperationKind::AddItem => self.create,
            OperationKind::ListFolders | OperationKind::ListItems => self.read,
            OperationKind::DeleteFolder | OperationKind::DeleteItem | OperationKind::SignOut => {
                self.delete
            }
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_simulated_round_trips() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.for_operation(OperationKind::CreateFolder), Duration::from_millis(500));
        assert_eq!(profile.for_operation(OperationKind::AddItem), Duration::from_millis(500));
        assert_eq!(profile.for_operation(OperationKind::SignIn), Duration::from_millis(1500));
        assert_eq!(profile.for_operation(OperationKind::ListItems), Duration::ZERO);
    }
}
