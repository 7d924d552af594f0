//! # Domain Types
//!
//! Three records make up the attendance model:
//!
//! - [`TagPayload`]: what a scanned tag says about its holder. Ephemeral, consumed once.
//! - [`CheckInEntry`]: a member who is currently present.
//! - [`CompletedSession`]: a finished visit waiting to be reported.
//!
//! Timestamps are epoch milliseconds ([`Millis`]). The serde names match the
//! persisted ledger layout (`userId`, `timestamp`, `clockInTimestamp`,
//! `clockOutTimestamp`) so stored data stays readable across versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Epoch milliseconds.
pub type Millis = i64;

/// Decoded tag contents identifying a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPayload {
    pub user_id: String,
    pub is_admin: bool,
}

impl TagPayload {
    pub fn new(user_id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user_id: user_id.into(),
            is_admin,
        }
    }
}

/// A member currently checked in. At most one entry per `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInEntry {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "timestamp")]
    pub check_in_timestamp: Millis,
}

impl CheckInEntry {
    pub fn new(user_id: impl Into<String>, check_in_timestamp: Millis) -> Self {
        Self {
            user_id: user_id.into(),
            check_in_timestamp,
        }
    }

    /// Closes this visit. `check_out_timestamp` is expected to be later than
    /// the check-in, but a wall clock adjustment can break that and it is kept as is.
    pub fn complete(self, check_out_timestamp: Millis) -> CompletedSession {
        CompletedSession {
            user_id: self.user_id,
            check_in_timestamp: self.check_in_timestamp,
            check_out_timestamp,
        }
    }
}

/// A finished visit, queued until the next successful report delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSession {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "clockInTimestamp")]
    pub check_in_timestamp: Millis,
    #[serde(rename = "clockOutTimestamp")]
    pub check_out_timestamp: Millis,
}

impl CompletedSession {
    /// Duration of the visit in milliseconds. Negative if the clock went backwards.
    pub fn duration_millis(&self) -> Millis {
        self.check_out_timestamp - self.check_in_timestamp
    }
}

/// What the operator asked the scan to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    CheckIn,
    CheckOut,
}

impl fmt::Display for ScanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanAction::CheckIn => write!(f, "check-in"),
            ScanAction::CheckOut => write!(f, "check-out"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scan action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for ScanAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "check-in" | "checkin" => Ok(ScanAction::CheckIn),
            "out" | "check-out" | "checkout" => Ok(ScanAction::CheckOut),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_carries_checkin_time() {
        let entry = CheckInEntry::new("alice", 1_000);
        let session = entry.complete(4_500);
        assert_eq!(session.user_id, "alice");
        assert_eq!(session.check_in_timestamp, 1_000);
        assert_eq!(session.check_out_timestamp, 4_500);
        assert_eq!(session.duration_millis(), 3_500);
    }

    #[test]
    fn test_scan_action_parsing() {
        assert_eq!("in".parse::<ScanAction>(), Ok(ScanAction::CheckIn));
        assert_eq!("Check-In".parse::<ScanAction>(), Ok(ScanAction::CheckIn));
        assert_eq!(" checkout ".parse::<ScanAction>(), Ok(ScanAction::CheckOut));
        assert_eq!(
            "sideways".parse::<ScanAction>(),
            Err(UnknownAction("sideways".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_ledger_layout() {
        let entry = CheckInEntry::new("bob", 42);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"userId":"bob","timestamp":42}"#);

        let session = entry.complete(43);
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(
            json,
            r#"{"userId":"bob","clockInTimestamp":42,"clockOutTimestamp":43}"#
        );
    }
}
