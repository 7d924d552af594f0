//! # API Layer
//!
//! The API is a thin facade over the command layer. It owns the one
//! [`LedgerStore`] of the process together with a [`Clock`] and the report
//! settings, and dispatches to `commands::*`.
//!
//! Mutating calls take `&mut self`, so a single owner can only run one scan or
//! report at a time. Hosts that need to share the ledger across threads use
//! [`SharedLedger`](crate::store::SharedLedger) with the command functions
//! directly.

use crate::clock::{Clock, SystemClock};
use crate::commands::status::LedgerStatus;
use crate::commands::{report, scan, status, ReportStatus, ScanResult};
use crate::error::Result;
use crate::model::{CheckInEntry, CompletedSession, ScanAction, TagPayload};
use crate::report::{ReportDelivery, ReportDocument, ReportOptions};
use crate::store::{LedgerStore, StorageBackend};
use crate::tag::{TagRead, TagReader};

pub struct RollcallApi<B: StorageBackend, C: Clock = SystemClock> {
    store: LedgerStore<B>,
    clock: C,
    report_options: ReportOptions,
}

impl<B: StorageBackend> RollcallApi<B, SystemClock> {
    pub fn new(store: LedgerStore<B>, report_options: ReportOptions) -> Self {
        Self::with_clock(store, SystemClock, report_options)
    }
}

impl<B: StorageBackend, C: Clock> RollcallApi<B, C> {
    pub fn with_clock(store: LedgerStore<B>, clock: C, report_options: ReportOptions) -> Self {
        Self {
            store,
            clock,
            report_options,
        }
    }

    pub fn store(&self) -> &LedgerStore<B> {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn report_options(&self) -> &ReportOptions {
        &self.report_options
    }

    pub fn process_scan(
        &mut self,
        payload: Option<&TagPayload>,
        action: ScanAction,
    ) -> Result<ScanResult> {
        scan::run(&self.store, &self.clock, payload, action)
    }

    pub fn process_read(&mut self, read: Option<&TagRead>, action: ScanAction) -> Result<ScanResult> {
        scan::run_read(&self.store, &self.clock, read, action)
    }

    pub fn process_named(&mut self, read: Option<&TagRead>, action: &str) -> Result<ScanResult> {
        scan::run_named(&self.store, &self.clock, read, action)
    }

    pub fn check_in(&mut self, read: &TagRead) -> Result<ScanResult> {
        self.process_read(Some(read), ScanAction::CheckIn)
    }

    pub fn check_out(&mut self, read: &TagRead) -> Result<ScanResult> {
        self.process_read(Some(read), ScanAction::CheckOut)
    }

    /// Waits for `reader` and processes whatever it returns.
    pub fn scan_from<R: TagReader + ?Sized>(
        &mut self,
        reader: &mut R,
        action: ScanAction,
    ) -> Result<ScanResult> {
        let read = reader.await_scan()?;
        self.process_read(read.as_ref(), action)
    }

    pub fn send_report<D: ReportDelivery + ?Sized>(&mut self, delivery: &mut D) -> Result<ReportStatus> {
        report::run(&self.store, &self.clock, delivery, &self.report_options)
    }

    pub fn preview_report(&self) -> Result<Option<ReportDocument>> {
        report::preview(&self.store, &self.clock, &self.report_options)
    }

    pub fn status(&self) -> Result<LedgerStatus> {
        status::run(&self.store)
    }

    pub fn checked_in(&self) -> Result<Vec<CheckInEntry>> {
        self.store.checked_in()
    }

    pub fn pending_sessions(&self) -> Result<Vec<CompletedSession>> {
        self.store.completed_sessions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::{Effect, Outcome};
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{options, RecordingDelivery};

    fn api() -> RollcallApi<MemBackend, FixedClock> {
        RollcallApi::with_clock(
            LedgerStore::with_backend(MemBackend::new()),
            FixedClock::new(1_000),
            options(),
        )
    }

    struct QueuedReader(Vec<Option<TagRead>>);

    impl TagReader for QueuedReader {
        fn await_scan(&mut self) -> Result<Option<TagRead>> {
            Ok(self.0.remove(0))
        }
    }

    #[test]
    fn test_end_to_end_alice() {
        let mut api = api();
        let read = TagRead::single(br#"{"userId":"alice","admin":false}"#.to_vec());

        let checked_in = api.check_in(&read).unwrap();
        assert_eq!(
            checked_in.outcome,
            Outcome::CheckedIn {
                user_id: "alice".to_string(),
                check_in_timestamp: 1_000
            }
        );

        api.clock().advance(5_000);
        let checked_out = api.check_out(&read).unwrap();
        assert_eq!(
            checked_out.outcome,
            Outcome::CheckedOut {
                user_id: "alice".to_string(),
                check_in_timestamp: 1_000,
                check_out_timestamp: 6_000
            }
        );
        assert_eq!(api.pending_sessions().unwrap().len(), 1);

        let mut delivery = RecordingDelivery::accepting();
        let status = api.send_report(&mut delivery).unwrap();
        assert!(matches!(status, ReportStatus::Sent { .. }));
        assert!(api.pending_sessions().unwrap().is_empty());
    }

    #[test]
    fn test_scan_from_reader() {
        let mut api = api();
        let mut reader = QueuedReader(vec![
            None,
            Some(TagRead::single(br#"{"userId":"root","admin":true}"#.to_vec())),
        ]);

        let nothing = api.scan_from(&mut reader, ScanAction::CheckIn).unwrap();
        assert_eq!(nothing.outcome, Outcome::InvalidTag);

        let admin = api.scan_from(&mut reader, ScanAction::CheckIn).unwrap();
        assert!(admin.outcome.is_mutation());
        assert_eq!(admin.effects, vec![Effect::SetReportActionEnabled(true)]);
    }

    #[test]
    fn test_status_and_preview() {
        let mut api = api();
        api.process_scan(Some(&TagPayload::new("a", false)), ScanAction::CheckIn)
            .unwrap();
        api.process_scan(Some(&TagPayload::new("b", false)), ScanAction::CheckIn)
            .unwrap();
        api.process_scan(Some(&TagPayload::new("b", false)), ScanAction::CheckOut)
            .unwrap();

        let status = api.status().unwrap();
        assert_eq!(status.checked_in.len(), 1);
        assert_eq!(status.pending.len(), 1);

        let preview = api.preview_report().unwrap().unwrap();
        assert!(preview.body.contains("b,1970-01-01 00:00:01"));
        assert_eq!(api.pending_sessions().unwrap().len(), 1);
    }

    #[test]
    fn test_named_unknown_action() {
        let mut api = api();
        let read = TagRead::single(br#"{"userId":"alice","admin":false}"#.to_vec());
        let result = api.process_named(Some(&read), "lunch").unwrap();
        assert_eq!(result.outcome, Outcome::InvalidTag);
        assert!(api.checked_in().unwrap().is_empty());
    }
}
