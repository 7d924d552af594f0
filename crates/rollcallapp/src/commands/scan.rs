//! The attendance state machine.
//!
//! Per member there are two states: **Absent** (not in the checked-in set) and
//! **Present**. A member never seen before is Absent. Check-in moves Absent to
//! Present; check-out moves Present back to Absent and records a
//! [`CompletedSession`](crate::model::CompletedSession). There is no terminal
//! state.
//!
//! Report-action effects are independent of the attendance result: an admin
//! tag presented for check-in enables the action even when the admin is
//! already present, and any check-out disables it.

use super::{Effect, Outcome, ScanResult};
use crate::clock::Clock;
use crate::codec::decode_tag;
use crate::error::Result;
use crate::model::{CheckInEntry, ScanAction, TagPayload};
use crate::store::{LedgerStore, StorageBackend};
use crate::tag::TagRead;
use tracing::{debug, info, warn};

pub fn run<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    payload: Option<&TagPayload>,
    action: ScanAction,
) -> Result<ScanResult> {
    let Some(payload) = payload else {
        return Ok(ScanResult::new(Outcome::InvalidTag));
    };

    match action {
        ScanAction::CheckIn => check_in(store, clock, payload),
        ScanAction::CheckOut => check_out(store, clock, payload),
    }
}

/// Decodes the raw read first. A read that does not decode is an invalid tag.
pub fn run_read<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    read: Option<&TagRead>,
    action: ScanAction,
) -> Result<ScanResult> {
    let payload = read.and_then(|read| match decode_tag(read) {
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!(error = %e, "rejecting tag");
            None
        }
    });
    run(store, clock, payload.as_ref(), action)
}

/// Like [`run_read`], with the action given as text from the client.
/// An action that does not parse is treated as an invalid tag and disables
/// the report action; nothing is written.
pub fn run_named<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    read: Option<&TagRead>,
    action: &str,
) -> Result<ScanResult> {
    match action.parse::<ScanAction>() {
        Ok(action) => run_read(store, clock, read, action),
        Err(e) => {
            debug!(error = %e, "ignoring scan");
            Ok(ScanResult::new(Outcome::InvalidTag)
                .with_effect(Effect::SetReportActionEnabled(false)))
        }
    }
}

fn check_in<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    payload: &TagPayload,
) -> Result<ScanResult> {
    let mut effects = Vec::new();
    if payload.is_admin {
        effects.push(Effect::SetReportActionEnabled(true));
    }

    let mut present = store.checked_in()?;
    let outcome = if present.iter().any(|e| e.user_id == payload.user_id) {
        Outcome::AlreadyInState {
            user_id: payload.user_id.clone(),
        }
    } else {
        let now = clock.now_millis();
        present.push(CheckInEntry::new(payload.user_id.clone(), now));
        store.replace_checked_in(&present)?;
        info!(user_id = %payload.user_id, at = now, "checked in");
        Outcome::CheckedIn {
            user_id: payload.user_id.clone(),
            check_in_timestamp: now,
        }
    };

    Ok(ScanResult { outcome, effects })
}

fn check_out<B: StorageBackend, C: Clock>(
    store: &LedgerStore<B>,
    clock: &C,
    payload: &TagPayload,
) -> Result<ScanResult> {
    let effects = vec![Effect::SetReportActionEnabled(false)];

    let mut present = store.checked_in()?;
    let Some(position) = present.iter().position(|e| e.user_id == payload.user_id) else {
        return Ok(ScanResult {
            outcome: Outcome::NotInState {
                user_id: payload.user_id.clone(),
            },
            effects,
        });
    };

    let entry = present.remove(position);
    let now = clock.now_millis();
    let session = entry.complete(now);

    // Record the session before releasing the member. If the release fails,
    // restore the session list so the ledger matches its previous state.
    let previous = store.completed_sessions()?;
    store.append_completed_session(session.clone())?;
    if let Err(e) = store.replace_checked_in(&present) {
        if let Err(restore) = store.replace_completed_sessions(&previous) {
            warn!(
                user_id = %session.user_id,
                error = %restore,
                "could not roll back check-out, session may be reported twice"
            );
        }
        return Err(e);
    }

    info!(user_id = %session.user_id, at = now, "checked out");
    Ok(ScanResult {
        outcome: Outcome::CheckedOut {
            user_id: session.user_id,
            check_in_timestamp: session.check_in_timestamp,
            check_out_timestamp: session.check_out_timestamp,
        },
        effects,
    })
}
