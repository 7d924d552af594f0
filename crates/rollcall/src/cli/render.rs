use colored::Colorize;
use rollcallapp::commands::status::LedgerStatus;
use rollcallapp::commands::{Effect, Outcome, ReportStatus, ScanResult};
use rollcallapp::model::{CheckInEntry, CompletedSession};
use rollcallapp::report::{format_timestamp, ReportZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn outcome_message(outcome: &Outcome, zone: &ReportZone) -> Message {
    match outcome {
        Outcome::CheckedIn { user_id, .. } => Message::new(
            MessageLevel::Success,
            format!("{} successfully checked in!", user_id),
        ),
        Outcome::CheckedOut {
            user_id,
            check_in_timestamp,
            ..
        } => Message::new(
            MessageLevel::Success,
            format!(
                "{} successfully checked out! Checked in at {}",
                user_id,
                format_timestamp(*check_in_timestamp, zone)
            ),
        ),
        Outcome::AlreadyInState { user_id } => Message::new(
            MessageLevel::Warning,
            format!("{} is already checked in!", user_id),
        ),
        Outcome::NotInState { user_id } => Message::new(
            MessageLevel::Warning,
            format!("{} is not checked in!", user_id),
        ),
        Outcome::InvalidTag => Message::new(MessageLevel::Error, "Invalid tag, please scan again."),
    }
}

fn effect_message(effect: &Effect) -> Message {
    match effect {
        Effect::SetReportActionEnabled(true) => {
            Message::new(MessageLevel::Info, "Report sending enabled.")
        }
        Effect::SetReportActionEnabled(false) => {
            Message::new(MessageLevel::Info, "Report sending disabled.")
        }
    }
}

pub fn scan_messages(result: &ScanResult, zone: &ReportZone) -> Vec<Message> {
    let mut messages = vec![outcome_message(&result.outcome, zone)];
    messages.extend(result.effects.iter().map(effect_message));
    messages
}

pub fn report_message(status: &ReportStatus) -> Message {
    match status {
        ReportStatus::Sent { sessions } => Message::new(
            MessageLevel::Success,
            format!("Report sent with {} session(s).", sessions.len()),
        ),
        ReportStatus::NothingToSend => Message::new(MessageLevel::Info, "Nothing to report."),
        ReportStatus::DeliveryFailed => Message::new(
            MessageLevel::Error,
            "Report could not be delivered; sessions kept for the next attempt.",
        ),
    }
}

pub fn print_checked_in(entries: &[CheckInEntry], zone: &ReportZone) {
    if entries.is_empty() {
        println!("{}", "Nobody is checked in.".dimmed());
        return;
    }
    for entry in entries {
        println!(
            "  {}  {}",
            format_timestamp(entry.check_in_timestamp, zone).dimmed(),
            entry.user_id.bold()
        );
    }
}

pub fn print_sessions(sessions: &[CompletedSession], zone: &ReportZone) {
    if sessions.is_empty() {
        println!("{}", "No sessions awaiting the report.".dimmed());
        return;
    }
    for session in sessions {
        println!(
            "  {} → {}  {}",
            format_timestamp(session.check_in_timestamp, zone).dimmed(),
            format_timestamp(session.check_out_timestamp, zone).dimmed(),
            session.user_id.bold()
        );
    }
}

pub fn print_status(status: &LedgerStatus, zone: &ReportZone) {
    println!("{}", "Checked in".bold());
    print_checked_in(&status.checked_in, zone);
    println!();
    println!(
        "{}",
        format!("{} session(s) awaiting the report", status.pending.len()).dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> ReportZone {
        ReportZone::utc()
    }

    #[test]
    fn test_outcome_messages() {
        let checked_out = Outcome::CheckedOut {
            user_id: "alice".to_string(),
            check_in_timestamp: 0,
            check_out_timestamp: 10,
        };
        let message = outcome_message(&checked_out, &utc());
        assert_eq!(message.level, MessageLevel::Success);
        assert_eq!(
            message.content,
            "alice successfully checked out! Checked in at 1970-01-01 00:00:00"
        );

        let already = Outcome::AlreadyInState {
            user_id: "bob".to_string(),
        };
        assert_eq!(
            outcome_message(&already, &utc()).content,
            "bob is already checked in!"
        );
        assert_eq!(
            outcome_message(&Outcome::InvalidTag, &utc()).level,
            MessageLevel::Error
        );
    }

    #[test]
    fn test_scan_messages_include_effects() {
        let result = ScanResult::new(Outcome::NotInState {
            user_id: "boss".to_string(),
        })
        .with_effect(Effect::SetReportActionEnabled(false));

        let messages = scan_messages(&result, &utc());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "Report sending disabled.");
    }

    #[test]
    fn test_report_message_levels() {
        assert_eq!(
            report_message(&ReportStatus::DeliveryFailed).level,
            MessageLevel::Error
        );
        assert_eq!(
            report_message(&ReportStatus::Sent { sessions: vec![] }).content,
            "Report sent with 0 session(s)."
        );
    }
}
