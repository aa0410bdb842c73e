use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Mutex;
use vault_core::VaultError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    SignIn,
    SignOut,
    ListFolders,
    CreateFolder,
    DeleteFolder,
    ListItems,
    AddItem,
    DeleteItem,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::SignIn => "sign in",
            OperationKind::SignOut => "sign out",
            OperationKind::ListFolders => "list folders",
            OperationKind::CreateFolder => "create folder",
            OperationKind::DeleteFolder => "delete folder",
            OperationKind::ListItems => "list items",
            OperationKind::AddItem => "add item",
            OperationKind::DeleteItem => "delete item",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Network,
    Timeout,
}

impl Fault {
    fn into_error(self, kind: OperationKind) -> VaultError {
        match self {
            Fault::Network => VaultError::Network(format!("{} failed: connection lost", kind)),
            Fault::Timeout => VaultError::Timeout(kind.to_string()),
        }
    }
}

/// Queued failures consumed by the next calls of a given kind.
#[derive(Debug, Default)]
pub struct FaultPlan {
    queued: Mutex<HashMap<OperationKind, VecDeque<Fault>>>,
}

impl FaultPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `times` calls of `kind` fail with `fault`.
    pub fn fail_next(&self, kind: OperationKind, fault: Fault, times: usize) {
        let mut queued = self.queued.lock().unwrap_or_else(|e| e.into_inner());
        let entry = queued.entry(kind).or_default();
        entry.extend(std::iter::repeat(fault).take(times));
    }

    pub fn clear(&self) {
        self.queued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub(crate) fn take(&self, kind: OperationKind) -> Option<VaultError> {
        let mut queued = self.queued.lock().unwrap_or_else(|e| e.into_inner());
        let fault = queued.get_mut(&kind).and_then(VecDeque::pop_front)?;
        tracing::warn!("Injected {:?} fault for {}", fault, kind);
        Some(fault.into_error(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faults_are_consumed_in_order() {
        let plan = FaultPlan::new();
        plan.fail_next(OperationKind::CreateFolder, Fault::Timeout, 1);
        plan.fail_next(OperationKind::CreateFolder, Fault::Network, 1);

        assert!(matches!(
            plan.take(OperationKind::CreateFolder),
            Some(VaultError::Timeout(_))
        ));
        assert!(matches!(
            plan.take(OperationKind::CreateFolder),
            Some(VaultError::Network(_))
        ));
        assert!(plan.take(OperationKind::CreateFolder).is_none());
    }

    #[test]
    fn test_faults_are_scoped_to_kind() {
        let plan = FaultPlan::new();
        plan.fail_next(OperationKind::AddItem, Fault::Network, 2);
        assert!(plan.take(OperationKind::DeleteItem).is_none());
        plan.clear();
        assert!(plan.take(OperationKind::AddItem).is_none());
    }
}
