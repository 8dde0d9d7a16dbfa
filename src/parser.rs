// File: ./src/parser.rs
//! Turns one line of user text into a validated [`Command`].
//!
//! Grammar:
//!
//! ```text
//! bye
//! list
//! mark <n> | unmark <n> | delete <n>
//! find <query>
//! cmd
//! todo <description>
//! deadline <description> /by <dd/MM/yyyy>
//! event <description> /at from <time-text>
//! ```
use crate::error::{DukeError, Result};
use crate::model::item::INPUT_DATE_FORMAT;
use chrono::NaiveDate;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

pub const DEADLINE_DELIMITER: &str = " /by ";
pub const EVENT_DELIMITER: &str = "/at ";
const EVENT_TIME_PREFIX: &str = "from";

/// First token of a command line. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CommandWord {
    Bye,
    List,
    Mark,
    Unmark,
    Delete,
    Event,
    Deadline,
    Todo,
    Find,
    Cmd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Todo { description: String },
    Deadline { description: String, due: NaiveDate },
    Event { description: String, when: String },
    Find(String),
    Commands,
}

/// Splits a line into its keyword and the trimmed remainder.
pub fn split_keyword(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

pub fn parse_keyword(word: &str) -> Result<CommandWord> {
    CommandWord::from_str(word).map_err(|_| DukeError::UnknownCommand)
}

/// Parses and validates a full command line.
///
/// An unrecognised keyword yields `UnknownCommand`; every other error comes
/// from the per-command validators.
pub fn parse_command(line: &str) -> Result<Command> {
    let (word, rest) = split_keyword(line);
    let keyword = parse_keyword(word)?;

    match keyword {
        CommandWord::Bye => Ok(Command::Bye),
        CommandWord::List => Ok(Command::List),
        CommandWord::Mark => parse_target(keyword, rest).map(Command::Mark),
        CommandWord::Unmark => parse_target(keyword, rest).map(Command::Unmark),
        CommandWord::Delete => parse_target(keyword, rest).map(Command::Delete),
        CommandWord::Todo => Ok(Command::Todo {
            description: require_description(keyword, rest)?.to_string(),
        }),
        CommandWord::Deadline => parse_deadline(rest),
        CommandWord::Event => parse_event(rest),
        CommandWord::Find => parse_search(rest).map(|q| Command::Find(q.to_string())),
        CommandWord::Cmd => expect_no_argument(rest).map(|_| Command::Commands),
    }
}

fn require_description(keyword: CommandWord, text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DukeError::EmptyDescription(keyword.to_string()));
    }
    Ok(text)
}

fn parse_target(keyword: CommandWord, rest: &str) -> Result<i64> {
    rest.parse::<i64>()
        .map_err(|_| DukeError::MissingTarget(keyword.to_string()))
}

fn parse_search(rest: &str) -> Result<&str> {
    if rest.is_empty() {
        return Err(DukeError::EmptySearchTerm);
    }
    Ok(rest)
}

fn expect_no_argument(rest: &str) -> Result<()> {
    if !rest.is_empty() {
        return Err(DukeError::UnexpectedArgument);
    }
    Ok(())
}

fn parse_deadline(rest: &str) -> Result<Command> {
    require_description(CommandWord::Deadline, rest)?;

    let (description, date) = match rest.split_once(DEADLINE_DELIMITER) {
        Some(parts) => parts,
        // "deadline /by 01/01/2024": nothing before the delimiter.
        None => match rest.strip_prefix(DEADLINE_DELIMITER.trim_start()) {
            Some(date) => ("", date),
            None => return Err(DukeError::InvalidDateFormat),
        },
    };
    let description = require_description(CommandWord::Deadline, description)?;
    let due = parse_input_date(date.trim())?;

    Ok(Command::Deadline {
        description: description.to_string(),
        due,
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    require_description(CommandWord::Event, rest)?;

    let (description, time) = rest
        .split_once(EVENT_DELIMITER)
        .ok_or(DukeError::MissingEventTime)?;
    let description = require_description(CommandWord::Event, description)?;

    let time = time.trim();
    let when = match time.strip_prefix(EVENT_TIME_PREFIX) {
        Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => after.trim(),
        _ => time,
    };
    if when.is_empty() {
        return Err(DukeError::MissingEventTime);
    }

    Ok(Command::Event {
        description: description.to_string(),
        when: when.to_string(),
    })
}

/// Strict `dd/MM/yyyy`: two-digit day and month, four-digit year, real calendar date.
pub fn parse_input_date(text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !well_formed {
        return Err(DukeError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(text, INPUT_DATE_FORMAT).map_err(|_| DukeError::InvalidDateFormat)
}
