//! Terminal stand-ins for the tag reader and the mail dispatcher.

use chrono::Utc;
use rollcallapp::error::{Result, RollcallError};
use rollcallapp::report::ReportDelivery;
use rollcallapp::tag::{TagRead, TagReader};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads tag records from `--tag` arguments, or from piped stdin when none were given.
pub struct CliTagReader {
    records: Vec<String>,
}

impl CliTagReader {
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }
}

impl TagReader for CliTagReader {
    fn await_scan(&mut self) -> Result<Option<TagRead>> {
        if !self.records.is_empty() {
            let records = std::mem::take(&mut self.records)
                .into_iter()
                .map(String::into_bytes)
                .collect();
            return Ok(Some(TagRead { records }));
        }

        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            debug!("no --tag given and stdin is a terminal, no tag to read");
            return Ok(None);
        }
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).map_err(RollcallError::Io)?;
        if buf.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(TagRead::single(buf)))
    }
}

/// Drops each report into an outbox directory as a mail file.
pub struct OutboxDelivery {
    dir: PathBuf,
    recipient: Option<String>,
    written: Option<PathBuf>,
}

impl OutboxDelivery {
    pub fn new(dir: PathBuf, recipient: Option<String>) -> Self {
        Self {
            dir,
            recipient,
            written: None,
        }
    }

    /// Path of the last mail written, if any.
    pub fn written(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    fn write(&self, subject: &str, body: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("report-{}.eml", Utc::now().format("%Y%m%d-%H%M%S%3f")));
        fs::write(&path, render_mail(self.recipient.as_deref(), subject, body))?;
        Ok(path)
    }
}

impl ReportDelivery for OutboxDelivery {
    fn send(&mut self, subject: &str, body: &str) -> bool {
        match self.write(subject, body) {
            Ok(path) => {
                self.written = Some(path);
                true
            }
            Err(e) => {
                warn!(error = %e, dir = %self.dir.display(), "could not write report to outbox");
                false
            }
        }
    }
}

/// Prints the mail to stdout. Always succeeds.
pub struct StdoutDelivery {
    pub recipient: Option<String>,
}

impl ReportDelivery for StdoutDelivery {
    fn send(&mut self, subject: &str, body: &str) -> bool {
        print!("{}", render_mail(self.recipient.as_deref(), subject, body));
        true
    }
}

fn render_mail(recipient: Option<&str>, subject: &str, body: &str) -> String {
    let mut mail = String::new();
    if let Some(to) = recipient {
        mail.push_str(&format!("To: {}\r\n", to));
    }
    mail.push_str(&format!("Subject: {}\r\n", subject));
    mail.push_str("Content-Type: text/plain; charset=utf-8\r\n\r\n");
    mail.push_str(body);
    mail
}
