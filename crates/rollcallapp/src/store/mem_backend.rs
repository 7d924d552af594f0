use super::backend::{Slot, StorageBackend};
use crate::error::{Result, RollcallError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the ledger is driven from a
/// single thread. Wrap the store in [`SharedLedger`](super::shared::SharedLedger)
/// to hand it across threads.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<Slot, String>>,
    simulate_write_error: RefCell<bool>,
    failing_slot: RefCell<Option<Slot>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Fail writes to `slot` only, or stop doing so with `None`.
    pub fn set_simulate_write_error_for(&self, slot: Option<Slot>) {
        *self.failing_slot.borrow_mut() = slot;
    }

    /// Test helper to plant raw slot text, bypassing the codec.
    pub fn set_raw(&self, slot: Slot, text: &str) {
        self.slots.borrow_mut().insert(slot, text.to_string());
    }

    fn check_writable(&self, slot: Slot) -> Result<()> {
        if *self.simulate_write_error.borrow() || *self.failing_slot.borrow() == Some(slot) {
            return Err(RollcallError::Store(format!("Simulated write error on {}", slot)));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn save(&self, slot: Slot, text: &str) -> Result<()> {
        self.check_writable(slot)?;
        self.slots.borrow_mut().insert(slot, text.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        self.check_writable(slot)?;
        self.slots.borrow_mut().remove(&slot);
        Ok(())
    }
}
