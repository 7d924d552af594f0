use super::backend::{Slot, StorageBackend};
use crate::codec::{decode_list, encode_list};
use crate::error::Result;
use crate::model::{CheckInEntry, CompletedSession};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct LedgerStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> LedgerStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Members currently checked in, in check-in order.
    pub fn checked_in(&self) -> Result<Vec<CheckInEntry>> {
        self.read(Slot::CheckedIn)
    }

    pub fn replace_checked_in(&self, entries: &[CheckInEntry]) -> Result<()> {
        self.write(Slot::CheckedIn, entries)
    }

    /// Sessions waiting for the next report, oldest first.
    pub fn completed_sessions(&self) -> Result<Vec<CompletedSession>> {
        self.read(Slot::CompletedSessions)
    }

    pub fn replace_completed_sessions(&self, sessions: &[CompletedSession]) -> Result<()> {
        self.write(Slot::CompletedSessions, sessions)
    }

    /// Read-modify-write. Callers must not run two of these concurrently on
    /// the same backend; see [`SharedLedger`](super::shared::SharedLedger).
    pub fn append_completed_session(&self, session: CompletedSession) -> Result<()> {
        let mut sessions = self.completed_sessions()?;
        sessions.push(session);
        self.replace_completed_sessions(&sessions)
    }

    pub fn clear_completed_sessions(&self) -> Result<()> {
        self.backend.remove(Slot::CompletedSessions)
    }

    // Absent or unparsable slots read as empty.
    fn read<T: DeserializeOwned>(&self, slot: Slot) -> Result<Vec<T>> {
        Ok(self
            .backend
            .load(slot)?
            .map(|text| decode_list(&text))
            .unwrap_or_default())
    }

    fn write<T: Serialize>(&self, slot: Slot, records: &[T]) -> Result<()> {
        self.backend.save(slot, &encode_list(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn store() -> LedgerStore<MemBackend> {
        LedgerStore::with_backend(MemBackend::new())
    }

    #[test]
    fn test_absent_slots_read_empty() {
        let store = store();
        assert!(store.checked_in().unwrap().is_empty());
        assert!(store.completed_sessions().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_slot_reads_empty() {
        let store = store();
        store.backend.set_raw(Slot::CheckedIn, "definitely not json");
        assert!(store.checked_in().unwrap().is_empty());
    }

    #[test]
    fn test_replace_checked_in_overwrites() {
        let store = store();
        store
            .replace_checked_in(&[CheckInEntry::new("a", 1), CheckInEntry::new("b", 2)])
            .unwrap();
        store.replace_checked_in(&[CheckInEntry::new("c", 3)]).unwrap();
        assert_eq!(store.checked_in().unwrap(), vec![CheckInEntry::new("c", 3)]);
    }

    #[test]
    fn test_append_keeps_order() {
        let store = store();
        let first = CheckInEntry::new("a", 1).complete(2);
        let second = CheckInEntry::new("b", 3).complete(4);
        store.append_completed_session(first.clone()).unwrap();
        store.append_completed_session(second.clone()).unwrap();
        assert_eq!(store.completed_sessions().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_append_preserves_valid_records_around_corrupt_one() {
        let store = store();
        store.backend.set_raw(
            Slot::CompletedSessions,
            r#"[{"userId":"a","clockInTimestamp":1,"clockOutTimestamp":2},{"userId":"b"}]"#,
        );
        let next = CheckInEntry::new("c", 5).complete(6);
        store.append_completed_session(next.clone()).unwrap();

        let sessions = store.completed_sessions().unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].user_id, "a");
        assert_eq!(sessions[1], next);
    }

    #[test]
    fn test_clear_removes_slot() {
        let store = store();
        store
            .append_completed_session(CheckInEntry::new("a", 1).complete(2))
            .unwrap();
        store.clear_completed_sessions().unwrap();
        assert!(store.completed_sessions().unwrap().is_empty());
        assert_eq!(store.backend.load(Slot::CompletedSessions).unwrap(), None);
    }

    #[test]
    fn test_write_error_propagates_and_keeps_old_state() {
        let store = store();
        store.replace_checked_in(&[CheckInEntry::new("a", 1)]).unwrap();
        store.backend.set_simulate_write_error(true);

        assert!(store.replace_checked_in(&[]).is_err());
        assert_eq!(store.checked_in().unwrap(), vec![CheckInEntry::new("a", 1)]);
    }
}
