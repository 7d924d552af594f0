//! # Report Rendering
//!
//! The attendance report is a CSV document, one row per completed session:
//!
//! ```text
//! Navn,Ankomst,Afgang
//! alice,2024-03-14 08:00:00,2024-03-14 16:30:00
//! ```
//!
//! Rows end in `\r\n`, which mail clients keep intact. Timestamps are rendered
//! in the report's [`ReportZone`]. The local zone applies the offset in effect
//! at each instant, so sessions on either side of a daylight-saving change
//! keep their wall-clock times. The subject carries the date of the report in
//! the configured locale's short date style.
//!
//! Delivery is someone else's job: a [`ReportDelivery`] receives the subject
//! and body and answers whether it took them.

use crate::model::{CompletedSession, Millis};
use chrono::{DateTime, FixedOffset, Local, Locale, Offset, TimeZone, Utc};
use tracing::warn;

pub const CSV_HEADER: &str = "Navn,Ankomst,Afgang";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LINE_END: &str = "\r\n";

/// Hands a finished report to whatever sends it.
pub trait ReportDelivery {
    /// Returns true once the report has been accepted for sending.
    fn send(&mut self, subject: &str, body: &str) -> bool;
}

impl<F> ReportDelivery for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn send(&mut self, subject: &str, body: &str) -> bool {
        self(subject, body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub subject: String,
    pub body: String,
}

/// The time zone timestamps are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportZone {
    /// The machine's zone, with the offset in effect at each instant.
    Local,
    Fixed(FixedOffset),
}

impl ReportZone {
    pub fn utc() -> Self {
        ReportZone::Fixed(Utc.fix())
    }

    fn datetime(&self, millis: Millis) -> Option<DateTime<FixedOffset>> {
        match self {
            ReportZone::Local => Local
                .timestamp_millis_opt(millis)
                .single()
                .map(|dt| dt.fixed_offset()),
            ReportZone::Fixed(offset) => offset.timestamp_millis_opt(millis).single(),
        }
    }
}

/// How a report is titled and which clock face it uses.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub locale: Locale,
    pub zone: ReportZone,
}

impl ReportOptions {
    pub fn new(title: impl Into<String>, locale: Locale, zone: ReportZone) -> Self {
        Self {
            title: title.into(),
            locale,
            zone,
        }
    }

    pub fn local(title: impl Into<String>, locale: Locale) -> Self {
        Self::new(title, locale, ReportZone::Local)
    }

    pub fn utc(title: impl Into<String>, locale: Locale) -> Self {
        Self::new(title, locale, ReportZone::utc())
    }
}

/// Looks up a locale such as `da_DK`. Unknown names fall back to POSIX.
pub fn parse_locale(name: &str) -> Locale {
    Locale::try_from(name).unwrap_or_else(|_| {
        warn!(locale = name, "unknown locale, using POSIX");
        Locale::POSIX
    })
}

pub fn format_timestamp(millis: Millis, zone: &ReportZone) -> String {
    match zone.datetime(millis) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

/// Builds the report document for `sessions` as of `now`.
pub fn render(sessions: &[CompletedSession], now: Millis, options: &ReportOptions) -> ReportDocument {
    let date = match options.zone.datetime(now) {
        Some(dt) => dt.format_localized("%x", options.locale).to_string(),
        None => now.to_string(),
    };
    let subject = format!("{} {}", options.title, date);

    let mut body = String::from(CSV_HEADER);
    body.push_str(LINE_END);
    for session in sessions {
        body.push_str(&csv_field(&session.user_id));
        body.push(',');
        body.push_str(&format_timestamp(session.check_in_timestamp, &options.zone));
        body.push(',');
        body.push_str(&format_timestamp(session.check_out_timestamp, &options.zone));
        body.push_str(LINE_END);
    }

    ReportDocument { subject, body }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
