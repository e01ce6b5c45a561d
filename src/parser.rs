//! Command-line parsing
//!
//! Turns one raw input line into a [`Command`]. Every failure is a typed
//! [`JungError`] with a message for the user; nothing here panics on odd
//! input.
//!
//! Markers (`/by`, `/from`, `/to`) are found with a plain forward substring
//! search, so a description that itself contains a marker is split at the
//! first occurrence.

use crate::command::Command;
use crate::config::{EventPolicy, JungConfig};
use crate::error::{JungError, Result};
use crate::task::{FIELD_DELIMITER, dates};
use chrono::{Duration, NaiveDateTime};

const CMD_BYE: &str = "bye";
const CMD_LIST: &str = "list";
const CMD_TODO: &str = "todo";
const CMD_DEADLINE: &str = "deadline";
const CMD_EVENT: &str = "event";
const CMD_MARK: &str = "mark";
const CMD_UNMARK: &str = "unmark";
const CMD_DELETE: &str = "delete";
const CMD_FIND: &str = "find";
const CMD_UNDO: &str = "undo";

const DEADLINE_MARKER: &str = "/by";
const EVENT_FROM_MARKER: &str = "/from";
const EVENT_TO_MARKER: &str = "/to";

const TODO_USAGE: &str = "todo <what you want to do>";
const DEADLINE_USAGE: &str = "deadline <what to do> /by <d/M/yyyy HHmm>";
const EVENT_USAGE: &str = "event <what> /from <d/M/yyyy HHmm> /to <d/M/yyyy HHmm>";
const FIND_USAGE: &str = "find <keyword>";

/// Command parser with its configured input limits
#[derive(Debug, Clone)]
pub struct Parser {
    max_input_length: usize,
    max_description_length: usize,
    event_policy: EventPolicy,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(&JungConfig::default())
    }
}

impl Parser {
    pub fn new(config: &JungConfig) -> Self {
        Self {
            max_input_length: config.max_input_length,
            max_description_length: config.max_description_length,
            event_policy: config.event.clone(),
        }
    }

    /// Parse one line of user input
    ///
    /// # Arguments
    /// * `raw` - The line as typed; the command word is case-insensitive
    ///
    /// # Returns
    /// The parsed command, or the reason the line was rejected
    pub fn parse(&self, raw: &str) -> Result<Command> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(JungError::EmptyInput);
        }
        if trimmed.chars().count() > self.max_input_length {
            return Err(JungError::InputTooLong {
                max: self.max_input_length,
            });
        }

        let normalized = normalize_whitespace(trimmed);
        let (word, rest) = normalized
            .split_once(' ')
            .unwrap_or((normalized.as_str(), ""));
        let word = word.to_lowercase();

        // Searching never writes to storage, so only find may use the delimiter
        if word != CMD_FIND && normalized.contains(FIELD_DELIMITER) {
            return Err(JungError::ReservedDelimiter);
        }

        match word.as_str() {
            CMD_BYE => Ok(Command::Exit),
            CMD_LIST => Ok(Command::List),
            CMD_UNDO => Ok(Command::Undo),
            CMD_TODO => self.parse_todo(rest),
            CMD_DEADLINE => self.parse_deadline(rest),
            CMD_EVENT => self.parse_event(rest),
            CMD_MARK => parse_task_number(CMD_MARK, rest).map(|index| Command::Mark { index }),
            CMD_UNMARK => parse_task_number(CMD_UNMARK, rest).map(|index| Command::Unmark { index }),
            CMD_DELETE => parse_task_number(CMD_DELETE, rest).map(|index| Command::Delete { index }),
            CMD_FIND => parse_find(rest),
            other => Err(JungError::UnknownCommand(other.to_string())),
        }
    }

    fn parse_todo(&self, rest: &str) -> Result<Command> {
        let description = rest.trim();
        if description.is_empty() {
            return Err(JungError::MissingRequiredField {
                command: CMD_TODO,
                field: "description",
                usage: TODO_USAGE,
            });
        }
        Ok(Command::AddTodo {
            description: self.check_description(description)?,
        })
    }

    fn parse_deadline(&self, rest: &str) -> Result<Command> {
        let marker_at = rest.find(DEADLINE_MARKER).ok_or(JungError::MissingMarker {
            command: CMD_DEADLINE,
            marker: DEADLINE_MARKER,
            usage: DEADLINE_USAGE,
        })?;

        let description = rest[..marker_at].trim();
        let by = rest[marker_at + DEADLINE_MARKER.len()..].trim();
        if description.is_empty() || by.is_empty() {
            return Err(JungError::MissingRequiredField {
                command: CMD_DEADLINE,
                field: "description or date",
                usage: DEADLINE_USAGE,
            });
        }

        Ok(Command::AddDeadline {
            description: self.check_description(description)?,
            by: parse_date_time(by)?,
        })
    }

    fn parse_event(&self, rest: &str) -> Result<Command> {
        let missing = |marker| JungError::MissingMarker {
            command: CMD_EVENT,
            marker,
            usage: EVENT_USAGE,
        };
        let from_at = rest
            .find(EVENT_FROM_MARKER)
            .ok_or_else(|| missing(EVENT_FROM_MARKER))?;
        let to_at = rest
            .find(EVENT_TO_MARKER)
            .ok_or_else(|| missing(EVENT_TO_MARKER))?;
        if from_at > to_at {
            return Err(JungError::MarkerOrder);
        }

        let description = rest[..from_at].trim();
        let start = rest[from_at + EVENT_FROM_MARKER.len()..to_at].trim();
        let end = rest[to_at + EVENT_TO_MARKER.len()..].trim();
        if description.is_empty() || start.is_empty() || end.is_empty() {
            return Err(JungError::MissingRequiredField {
                command: CMD_EVENT,
                field: "description, start time or end time",
                usage: EVENT_USAGE,
            });
        }

        let description = self.check_description(description)?;
        let from = parse_date_time(start)?;
        let to = parse_date_time(end)?;
        self.check_event_policy(from, to)?;

        Ok(Command::AddEvent {
            description,
            from,
            to,
        })
    }

    fn check_description(&self, description: &str) -> Result<String> {
        if description.chars().count() > self.max_description_length {
            return Err(JungError::DescriptionTooLong {
                max: self.max_description_length,
            });
        }
        Ok(description.to_string())
    }

    fn check_event_policy(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<()> {
        if self.event_policy.require_start_before_end && from >= to {
            return Err(JungError::EventEndsBeforeStart);
        }
        let min_minutes = self.event_policy.min_duration_minutes;
        if min_minutes > 0 && to - from < Duration::minutes(i64::from(min_minutes)) {
            return Err(JungError::EventTooShort { min_minutes });
        }
        Ok(())
    }
}

/// Collapse every run of whitespace into a single space
fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_date_time(raw: &str) -> Result<NaiveDateTime> {
    dates::parse_date_time(raw).ok_or_else(|| JungError::InvalidDateTimeFormat(raw.to_string()))
}

/// Parse a 1-based task number into a 0-based index
fn parse_task_number(command: &'static str, rest: &str) -> Result<usize> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(JungError::MissingTaskNumber { command });
    }
    match raw.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(JungError::InvalidTaskNumber(raw.to_string())),
    }
}

fn parse_find(rest: &str) -> Result<Command> {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Err(JungError::MissingRequiredField {
            command: CMD_FIND,
            field: "keyword",
            usage: FIND_USAGE,
        });
    }
    Ok(Command::Find {
        keyword: keyword.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, month: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn parse(input: &str) -> Result<Command> {
        Parser::default().parse(input)
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("bye").unwrap(), Command::Exit);
        assert_eq!(parse("  LIST ").unwrap(), Command::List);
        assert_eq!(parse("Undo").unwrap(), Command::Undo);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse(""), Err(JungError::EmptyInput)));
        assert!(matches!(parse("   \t "), Err(JungError::EmptyInput)));
    }

    #[test]
    fn test_unknown_command() {
        match parse("dance now") {
            Err(JungError::UnknownCommand(word)) => assert_eq!(word, "dance"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_todo_normalizes_whitespace() {
        assert_eq!(
            parse("TODO   buy    milk ").unwrap(),
            Command::AddTodo {
                description: "buy milk".to_string()
            }
        );
        assert!(matches!(
            parse("todo   "),
            Err(JungError::MissingRequiredField { command: "todo", .. })
        ));
    }

    #[test]
    fn test_deadline() {
        assert_eq!(
            parse("deadline return book /by 2/12/2025 1800").unwrap(),
            Command::AddDeadline {
                description: "return book".to_string(),
                by: at(2, 12, 18),
            }
        );
    }

    #[test]
    fn test_deadline_errors() {
        assert!(matches!(
            parse("deadline return book"),
            Err(JungError::MissingMarker { marker: "/by", .. })
        ));
        assert!(matches!(
            parse("deadline /by 2/12/2025 1800"),
            Err(JungError::MissingRequiredField { .. })
        ));
        assert!(matches!(
            parse("deadline return book /by"),
            Err(JungError::MissingRequiredField { .. })
        ));
        assert!(matches!(
            parse("deadline return book /by next friday"),
            Err(JungError::InvalidDateTimeFormat(raw)) if raw == "next friday"
        ));
    }

    #[test]
    fn test_event() {
        assert_eq!(
            parse("event trip /from 2/12/2025 0900 /to 3/12/2025 1800").unwrap(),
            Command::AddEvent {
                description: "trip".to_string(),
                from: at(2, 12, 9),
                to: at(3, 12, 18),
            }
        );
    }

    #[test]
    fn test_event_marker_errors() {
        assert!(matches!(
            parse("event trip /to 3/12/2025 1800 /from 2/12/2025 0900"),
            Err(JungError::MarkerOrder)
        ));
        assert!(matches!(
            parse("event trip /from 2/12/2025 0900"),
            Err(JungError::MissingMarker { marker: "/to", .. })
        ));
        assert!(matches!(
            parse("event trip /to 3/12/2025 1800"),
            Err(JungError::MissingMarker { marker: "/from", .. })
        ));
        assert!(matches!(
            parse("event /from 2/12/2025 0900 /to 3/12/2025 1800"),
            Err(JungError::MissingRequiredField { .. })
        ));
        assert!(matches!(
            parse("event trip /from soon /to 3/12/2025 1800"),
            Err(JungError::InvalidDateTimeFormat(_))
        ));
    }

    #[test]
    fn test_event_policy_is_off_by_default() {
        assert!(parse("event backwards /from 3/12/2025 1800 /to 2/12/2025 0900").is_ok());
    }

    #[test]
    fn test_event_policy_when_enabled() {
        let mut config = JungConfig::default();
        config.event.require_start_before_end = true;
        config.event.min_duration_minutes = 30;
        let parser = Parser::new(&config);

        assert!(matches!(
            parser.parse("event x /from 3/12/2025 1800 /to 2/12/2025 0900"),
            Err(JungError::EventEndsBeforeStart)
        ));
        assert!(matches!(
            parser.parse("event x /from 2/12/2025 0900 /to 2/12/2025 0915"),
            Err(JungError::EventTooShort { min_minutes: 30 })
        ));
        assert!(
            parser
                .parse("event x /from 2/12/2025 0900 /to 2/12/2025 0930")
                .is_ok()
        );
    }

    #[test]
    fn test_task_numbers_become_zero_based() {
        assert_eq!(parse("mark 1").unwrap(), Command::Mark { index: 0 });
        assert_eq!(parse("unmark 3").unwrap(), Command::Unmark { index: 2 });
        assert_eq!(parse("DELETE 10").unwrap(), Command::Delete { index: 9 });
    }

    #[test]
    fn test_missing_task_number() {
        for (input, expected) in [("mark", "mark"), ("UNMARK  ", "unmark"), ("delete", "delete")] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(&err, JungError::MissingTaskNumber { command } if *command == expected),
                "unexpected for {:?}: {:?}",
                input,
                err
            );
            assert_eq!(
                err.to_string(),
                format!(
                    "{} command need task number leh! Which task you want to {}?",
                    expected, expected
                )
            );
        }
    }

    #[test]
    fn test_invalid_task_numbers() {
        for input in ["mark abc", "delete 0", "unmark -1", "delete 1.5"] {
            assert!(
                matches!(parse(input), Err(JungError::InvalidTaskNumber(_))),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(
            parse("find Book").unwrap(),
            Command::Find {
                keyword: "Book".to_string()
            }
        );
        assert!(matches!(
            parse("find   "),
            Err(JungError::MissingRequiredField { command: "find", .. })
        ));
    }

    #[test]
    fn test_marker_inside_description_splits_early() {
        // Known limitation: the first "/by" wins
        assert!(matches!(
            parse("deadline buy milk /by accident /by 2/12/2025 1800"),
            Err(JungError::InvalidDateTimeFormat(_))
        ));
    }

    #[test]
    fn test_reserved_delimiter() {
        assert!(matches!(
            parse("todo a | b"),
            Err(JungError::ReservedDelimiter)
        ));
        assert!(matches!(
            parse("todo a   |   b"),
            Err(JungError::ReservedDelimiter)
        ));
        assert!(parse("todo a|b").is_ok());
        assert!(parse("find a | b").is_ok());
    }

    #[test]
    fn test_length_limits() {
        let long_input = format!("todo {}", "x".repeat(600));
        assert!(matches!(
            parse(&long_input),
            Err(JungError::InputTooLong { max: 500 })
        ));

        let long_description = format!("todo {}", "x".repeat(201));
        assert!(matches!(
            parse(&long_description),
            Err(JungError::DescriptionTooLong { max: 200 })
        ));
    }
}
