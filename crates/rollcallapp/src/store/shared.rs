use super::backend::StorageBackend;
use super::ledger::LedgerStore;
use crate::error::{Result, RollcallError};
use std::sync::{Arc, Mutex};

/// A [`LedgerStore`] behind one process-wide lock.
///
/// Every closure passed to [`SharedLedger::with`] runs with exclusive access,
/// so a whole scan or report (several reads and writes) cannot interleave with
/// another one. Clones share the same lock.
pub struct SharedLedger<B: StorageBackend> {
    inner: Arc<Mutex<LedgerStore<B>>>,
}

impl<B: StorageBackend> Clone for SharedLedger<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StorageBackend> SharedLedger<B> {
    pub fn new(store: LedgerStore<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&LedgerStore<B>) -> Result<R>,
    {
        let store = self
            .inner
            .lock()
            .map_err(|_| RollcallError::Store("ledger lock poisoned".to_string()))?;
        f(&store)
    }
}
