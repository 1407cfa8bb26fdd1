use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;
use registrar_core::DraftField;

/// Rustyline helper: completes slash commands and draft field names.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    fields: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
            fields: DraftField::ALL.iter().map(|f| f.name().to_string()).collect(),
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<&String>) {
        if let Some(partial) = line.strip_prefix("/set ") {
            if !partial.contains(' ') {
                let matches = self.fields.iter().filter(|f| f.starts_with(partial)).collect();
                return ("/set ".len(), matches);
            }
            return (0, Vec::new());
        }

        if line.starts_with('/') && !line.contains(' ') {
            return (0, self.commands.iter().filter(|cmd| cmd.starts_with(line)).collect());
        }

        (0, Vec::new())
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.clone(),
                replacement: m.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .into_iter()
            .find(|m| m.len() > typed.len())
            .map(|m| m[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_commands() {
        let helper = CliHelper::new();
        let (start, matches) = helper.candidates("/s");
        assert_eq!(start, 0);
        assert_eq!(matches, vec!["/set", "/submit", "/station"]);
    }

    #[test]
    fn test_completes_field_names_after_set() {
        let helper = CliHelper::new();
        let (start, matches) = helper.candidates("/set check");
        assert_eq!(start, 5);
        assert_eq!(matches, vec!["checkInTime", "checkInId"]);
    }

    #[test]
    fn test_no_completion_for_free_text() {
        let helper = CliHelper::new();
        assert!(helper.candidates("how many").1.is_empty());
        assert!(helper.candidates("/set status Act").1.is_empty());
    }
}
