//! # Command Layer
//!
//! This module contains the **core business logic** of rollcall. Each operation
//! lives in its own submodule and implements plain functions over a
//! [`LedgerStore`](crate::store::LedgerStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Any UI**: no messages are formatted here. Commands return [`Outcome`]
//!   and [`Effect`] values, and the client decides how to show them.
//! - **Hold state**: the ledger is re-read from the store on every call.
//! - **Decide on delivery**: sending the report goes through a caller-supplied
//!   [`ReportDelivery`](crate::report::ReportDelivery).
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `MemBackend` and `FixedClock` so every timestamp is predictable.
//!
//! ## Command Modules
//!
//! - [`scan`]: the attendance state machine (check-in / check-out)
//! - [`report`]: compose, deliver and clear the pending sessions
//! - [`status`]: read-only views of the ledger

use crate::model::{CompletedSession, Millis};

pub mod report;
pub mod scan;
pub mod status;

/// Result of processing one scan. Carries everything a client needs to tell
/// the operator what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    CheckedIn {
        user_id: String,
        check_in_timestamp: Millis,
    },
    CheckedOut {
        user_id: String,
        check_in_timestamp: Millis,
        check_out_timestamp: Millis,
    },
    /// Check-in for a member who is already present.
    AlreadyInState { user_id: String },
    /// Check-out for a member who is not present.
    NotInState { user_id: String },
    /// The tag did not decode, or the requested action was not understood.
    InvalidTag,
}

impl Outcome {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Outcome::CheckedIn { user_id, .. }
            | Outcome::CheckedOut { user_id, .. }
            | Outcome::AlreadyInState { user_id }
            | Outcome::NotInState { user_id } => Some(user_id.as_str()),
            Outcome::InvalidTag => None,
        }
    }

    /// True when the ledger was changed.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Outcome::CheckedIn { .. } | Outcome::CheckedOut { .. })
    }
}

/// A side effect the client is asked to apply after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show or hide the "send report" action.
    SetReportActionEnabled(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub outcome: Outcome,
    pub effects: Vec<Effect>,
}

impl ScanResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// The last requested report-action state, if any effect asked for one.
    pub fn report_action(&self) -> Option<bool> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::SetReportActionEnabled(enabled) => Some(*enabled),
        })
    }
}

/// Result of a report attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// Delivered; these sessions were cleared from the ledger.
    Sent { sessions: Vec<CompletedSession> },
    /// No sessions were pending; delivery was not attempted.
    NothingToSend,
    /// Delivery declined or unavailable; the ledger is untouched.
    DeliveryFailed,
}
