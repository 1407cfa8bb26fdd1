//! Terminal rendering of command outcomes.

use crate::app::Outcome;
use colored::Colorize;
use registrar_core::assistant::{ConversationMessage, MessageRole};
use registrar_core::live_feed::{FeedStatus, STATIONS};
use registrar_core::{CheckInRecord, CheckInStatus, DraftField};

pub const HELP: &[(&str, &str)] = &[
    ("/set <field> [value]", "edit the draft (visitorId, checkInTime, checkInId, status)"),
    ("/generate", "fill the check-in ID with a random badge code"),
    ("/submit", "validate the draft and add the check-in"),
    ("/draft", "show the draft and any errors"),
    ("/records", "list check-ins, newest first"),
    ("/feed", "switch between the dashboard and the live feed"),
    ("/station [n]", "list or choose the live feed station"),
    ("/chat", "open the assistant"),
    ("/close", "close the assistant"),
    ("quit", "leave the console"),
];

/// Header printed at startup.
pub fn banner(election_date: &str, station: &str) -> Vec<String> {
    vec![
        "=== Registrar Hub ===".bright_magenta().bold().to_string(),
        format!("Election Date: {election_date} | Station: {station}")
            .bright_black()
            .to_string(),
        "Type '/help' for commands, or 'quit' to exit.".bright_black().to_string(),
    ]
}

/// Lines to print for an outcome. `Ask` prints nothing; its reply arrives later.
pub fn outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::FieldUpdated { field, value } => {
            vec![format!("{field} = {value:?}").bright_black().to_string()]
        }
        Outcome::Generated(badge) => vec![format!("Check In ID: {badge}").cyan().to_string()],
        Outcome::Committed(record) => {
            let mut lines = vec!["Check-in recorded.".bright_green().to_string()];
            lines.push(record_row(record));
            lines
        }
        Outcome::Rejected(errors) => error_list(errors),
        Outcome::Draft { draft, errors } => {
            let mut lines: Vec<String> = DraftField::ALL
                .iter()
                .map(|field| format!("  {:<12} {}", field.name(), draft.get(*field)))
                .collect();
            lines.extend(error_list(errors));
            lines
        }
        Outcome::Records(records) => records_table(records),
        Outcome::EnteredFeed { station, status } => vec![
            format!("Live feed - {station}").bright_magenta().to_string(),
            feed_status(status),
        ],
        Outcome::LeftFeed => vec!["Returned to dashboard.".bright_black().to_string()],
        Outcome::Stations { selected } => STATIONS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let marker = if Some(*name) == *selected { "*" } else { " " };
                format!("{marker} {}. {name}", i + 1)
            })
            .collect(),
        Outcome::StationSelected(name) => vec![format!("Station: {name}").cyan().to_string()],
        Outcome::AssistantOpened(transcript) => {
            let mut lines = vec!["Registrar Assistant (type /close to leave)"
                .bright_magenta()
                .to_string()];
            lines.extend(transcript.iter().flat_map(message));
            lines
        }
        Outcome::AssistantClosed => vec!["Assistant closed.".bright_black().to_string()],
        Outcome::Ask { .. } => Vec::new(),
        Outcome::Help => HELP
            .iter()
            .map(|(usage, text)| format!("  {:<22} {}", usage.cyan(), text))
            .collect(),
        Outcome::Quit => vec!["Goodbye!".bright_green().to_string()],
        Outcome::Notice(text) => vec![text.yellow().to_string()],
    }
}

/// A transcript entry, one output line per content line.
pub fn message(message: &ConversationMessage) -> Vec<String> {
    message
        .content
        .lines()
        .map(|line| match message.role {
            MessageRole::User => format!("> {line}").green().to_string(),
            MessageRole::Assistant => line.bright_blue().to_string(),
        })
        .collect()
}

pub fn feed_status(status: &FeedStatus) -> String {
    match status {
        FeedStatus::Live { .. } => status.to_string().bright_red().to_string(),
        FeedStatus::WaitingForConnection => status.to_string().bright_black().to_string(),
    }
}

fn error_list(errors: &[String]) -> Vec<String> {
    errors
        .iter()
        .map(|err| format!("  - {err}").red().to_string())
        .collect()
}

fn records_table(records: &[CheckInRecord]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{:<10} {:<11} {:<10} {:<8} {}",
            "Visitor", "Date", "Time", "Badge", "Status"
        )
        .bold()
        .to_string(),
    ];
    if records.is_empty() {
        lines.push("No records found for today.".bright_black().to_string());
    }
    lines.extend(records.iter().map(record_row));
    lines.push(format!("Total Records: {}", records.len()).bright_black().to_string());
    lines
}

fn record_row(record: &CheckInRecord) -> String {
    let status = match record.status {
        CheckInStatus::Active => record.status.as_str().green(),
        CheckInStatus::Pending => record.status.as_str().yellow(),
        CheckInStatus::Cancelled => record.status.as_str().red(),
    };
    format!(
        "{:<10} {:<11} {:<10} {:<8} {}",
        record.visitor_id, record.check_in_date, record.check_in_time, record.check_in_id, status
    )
}
