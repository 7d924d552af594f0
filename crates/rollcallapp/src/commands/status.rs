use crate::error::Result;
use crate::model::{CheckInEntry, CompletedSession};
use crate::store::{LedgerStore, StorageBackend};

/// Snapshot of the ledger for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStatus {
    pub checked_in: Vec<CheckInEntry>,
    pub pending: Vec<CompletedSession>,
}

pub fn run<B: StorageBackend>(store: &LedgerStore<B>) -> Result<LedgerStatus> {
    Ok(LedgerStatus {
        checked_in: store.checked_in()?,
        pending: store.completed_sessions()?,
    })
}

/// Whether `user_id` is currently present.
pub fn is_present<B: StorageBackend>(store: &LedgerStore<B>, user_id: &str) -> Result<bool> {
    Ok(store.checked_in()?.iter().any(|e| e.user_id == user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mem_store;

    #[test]
    fn test_status_reflects_both_slots() {
        let store = mem_store();
        store
            .replace_checked_in(&[CheckInEntry::new("alice", 1)])
            .unwrap();
        store
            .append_completed_session(CheckInEntry::new("bob", 1).complete(2))
            .unwrap();

        let status = run(&store).unwrap();
        assert_eq!(status.checked_in.len(), 1);
        assert_eq!(status.pending.len(), 1);
        assert!(is_present(&store, "alice").unwrap());
        assert!(!is_present(&store, "bob").unwrap());
    }
}
