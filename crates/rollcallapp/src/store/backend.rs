use crate::error::Result;
use std::fmt;

/// The two durable slots of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Members currently checked in (`registeredMembers`).
    CheckedIn,
    /// Completed sessions awaiting the next report (`storedRegistrations`).
    CompletedSessions,
}

impl Slot {
    /// Persisted key name.
    pub fn key(self) -> &'static str {
        match self {
            Slot::CheckedIn => "registeredMembers",
            Slot::CompletedSessions => "storedRegistrations",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while LedgerStore handles the "what" (encoding, read-modify-write).
pub trait StorageBackend {
    /// Read the raw text of a slot.
    /// Returns Ok(None) if the slot was never written or was removed.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the slot's text.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, slot: Slot, text: &str) -> Result<()>;

    /// Remove the slot. Removing an absent slot is not an error.
    fn remove(&self, slot: Slot) -> Result<()>;
}
