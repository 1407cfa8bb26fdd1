//! Parsing of console input lines.

use registrar_core::DraftField;
use thiserror::Error;

/// Slash commands offered for completion.
pub const COMMANDS: [&str; 11] = [
    "/set", "/generate", "/submit", "/draft", "/records", "/feed", "/station", "/chat", "/close",
    "/help", "/quit",
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: DraftField, value: String },
    Generate,
    Submit,
    Draft,
    Records,
    Feed,
    /// 1-based station number, or `None` to list stations.
    Station(Option<usize>),
    Chat,
    Close,
    Help,
    Quit,
    /// Free text for the assistant.
    Say(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type /help)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Field(String),

    #[error("Open the assistant with /chat to ask a question")]
    AssistantClosed,
}

/// Parses a trimmed, non-empty line.
///
/// Lines that do not start with `/` are assistant questions and are only
/// accepted while the assistant is open.
pub fn parse(line: &str, assistant_open: bool) -> Result<Command, CommandError> {
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }

    if !line.starts_with('/') {
        return if assistant_open {
            Ok(Command::Say(line.to_string()))
        } else {
            Err(CommandError::AssistantClosed)
        };
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/set" => parse_set(rest),
        "/generate" => Ok(Command::Generate),
        "/submit" => Ok(Command::Submit),
        "/draft" => Ok(Command::Draft),
        "/records" => Ok(Command::Records),
        "/feed" => Ok(Command::Feed),
        "/station" if rest.is_empty() => Ok(Command::Station(None)),
        "/station" => rest
            .parse::<usize>()
            .map(|n| Command::Station(Some(n)))
            .map_err(|_| CommandError::Usage("/station [number]")),
        "/chat" => Ok(Command::Chat),
        "/close" => Ok(Command::Close),
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// `/set <field> [value]`; a missing value clears the field.
fn parse_set(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(
            "/set <visitorId|checkInTime|checkInId|status> [value]",
        ));
    }

    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    let field = field
        .parse::<DraftField>()
        .map_err(|err| CommandError::Field(err.to_string()))?;

    Ok(Command::Set {
        field,
        value: value.to_string(),
    })
}
