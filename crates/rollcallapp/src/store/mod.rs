//! # Storage Layer
//!
//! The ledger lives in two independently addressable text slots:
//!
//! | Slot | Key | Contents |
//! |------|-----|----------|
//! | [`Slot::CheckedIn`] | `registeredMembers` | `[{ "userId", "timestamp" }]` |
//! | [`Slot::CompletedSessions`] | `storedRegistrations` | `[{ "userId", "clockInTimestamp", "clockOutTimestamp" }]` |
//!
//! ## Layering
//!
//! - [`backend::StorageBackend`]: raw get/replace/remove of slot text.
//! - [`ledger::LedgerStore`]: typed collections on top of a backend, encoded
//!   through [`crate::codec`]. The only component that writes slots.
//! - [`shared::SharedLedger`]: the store behind a global lock for hosts that
//!   process scans on more than one thread.
//!
//! ## Semantics
//!
//! - **No cache**: every read decodes fresh from the backend.
//! - **Whole-slot writes**: every write re-encodes the full collection and
//!   replaces the slot in a single call.
//! - **Fail-open reads**: an absent or unparsable slot is an empty list.
//!   Individual malformed records are dropped.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per slot, atomic temp-file + rename.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── registeredMembers.json
//! └── storedRegistrations.json
//! ```

pub mod backend;
pub mod fs_backend;
pub mod ledger;
pub mod mem_backend;
pub mod shared;

pub use backend::{Slot, StorageBackend};
pub use ledger::LedgerStore;
pub use shared::SharedLedger;
