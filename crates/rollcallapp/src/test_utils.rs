use crate::model::TagPayload;
use crate::report::{ReportDelivery, ReportDocument, ReportOptions};
use crate::store::mem_backend::MemBackend;
use crate::store::LedgerStore;
use chrono::Locale;

pub fn mem_store() -> LedgerStore<MemBackend> {
    LedgerStore::with_backend(MemBackend::new())
}

pub fn tag(user_id: &str, is_admin: bool) -> TagPayload {
    TagPayload::new(user_id, is_admin)
}

pub fn options() -> ReportOptions {
    ReportOptions::utc("Attendance report", Locale::en_US)
}

/// Delivery that records every document it is handed.
pub struct RecordingDelivery {
    pub accept: bool,
    pub sent: Vec<ReportDocument>,
}

impl RecordingDelivery {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            sent: Vec::new(),
        }
    }

    pub fn refusing() -> Self {
        Self {
            accept: false,
            sent: Vec::new(),
        }
    }
}

impl ReportDelivery for RecordingDelivery {
    fn send(&mut self, subject: &str, body: &str) -> bool {
        self.sent.push(ReportDocument {
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.accept
    }
}
