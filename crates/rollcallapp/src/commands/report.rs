use super::ReportStatus;
use crate::clock::Clock;
use crate::error::Result;
use crate::report::{render, ReportDelivery, ReportDocument, ReportOptions};
use crate::store::{LedgerStore, StorageBackend};
use tracing::{info, warn};

/// Composes the report from pending sessions and hands it to `delivery`.
///
/// The ledger is cleared only when delivery reports success. Nothing is sent
/// when no sessions are pending.
pub fn run<B: StorageBackend, C: Clock, D: ReportDelivery + ?Sized>(
    store: &LedgerStore<B>,
    clock: &C,
    delivery: &mut D,
    options: &ReportOptions,
) -> Result<ReportStatus> {
    let sessions = store.completed_sessions()?;
    if sessions.is_empty() {
        return Ok(ReportStatus::NothingToSend);
    }

    let doc = render(&sessions, clock.now_millis(), options);
    if !delivery.send(&doc.subject, &doc.body) {
        warn!(sessions = sessions.len(), "report delivery failed, keeping sessions");
        return Ok(ReportStatus::DeliveryFailed);
    }

    if let Err(e) = store.clear_completed_sessions() {
        warn!(
            sessions = sessions.len(),
            error = %e,
            "report delivered but sessions not cleared, next report repeats them"
        );
        return Err(e);
    }
    info!(sessions = sessions.len(), subject = %doc.subject, "report sent");
    Ok(ReportStatus::Sent { sessions })
}

/// Renders the report without sending or clearing anything.
/// Returns None when no sessions are pending.
pub fn preview<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    options: &ReportOptions,
) -> Result<Option<ReportDocument>> {
    let sessions = store.completed_sessions()?;
    if sessions.is_empty() {
        return Ok(None);
    }
    Ok(Some(render(&sessions, clock.now_millis(), options)))
}
