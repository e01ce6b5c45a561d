//! Error types for the Jung task assistant
//!
//! Every failure that can reach the user is a variant of [`JungError`]. The
//! `Display` text of each variant is the message shown to the user, so the
//! command-processing entry point can turn any error straight into a reply.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T, E = JungError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum JungError {
    #[error("Eh hello, you never say anything leh! Type something lah!")]
    EmptyInput,

    #[error("Wah, your command too long liao! Keep it under {max} characters can?")]
    InputTooLong { max: usize },

    #[error("Cannot use ' | ' in your command lah! It's reserved!")]
    ReservedDelimiter,

    #[error(
        "Ha? I don't understand '{0}' leh. Type 'list' to see your tasks or try other commands!"
    )]
    UnknownCommand(String),

    /// A description, keyword or date field was empty after trimming
    #[error("Aiyo, your {command} {field} missing leh! Try: {usage}")]
    MissingRequiredField {
        command: &'static str,
        field: &'static str,
        usage: &'static str,
    },

    #[error("Your task description too long lah! Keep it under {max} characters!")]
    DescriptionTooLong { max: usize },

    #[error("Eh your {command} missing the '{marker}' part! Format should be: {usage}")]
    MissingMarker {
        command: &'static str,
        marker: &'static str,
        usage: &'static str,
    },

    #[error("Aiya, your event timing upside down! '/from' must come before '/to' lah!")]
    MarkerOrder,

    #[error(
        "Wah lau, your date format wrong lah! '{0}' is not d/M/yyyy HHmm (like 15/3/2024 1430). Don't anyhow type!"
    )]
    InvalidDateTimeFormat(String),

    #[error("Your event end before it start? Cannot lah!")]
    EventEndsBeforeStart,

    #[error("Your event too short leh! Must last at least {min_minutes} minute(s).")]
    EventTooShort { min_minutes: u32 },

    #[error("{command} command need task number leh! Which task you want to {command}?")]
    MissingTaskNumber { command: &'static str },

    #[error("Eh '{0}' is not a proper task number lah! Give me real task number can?")]
    InvalidTaskNumber(String),

    /// `index` is 0-based; the message shows the 1-based number the user typed
    #[error(
        "Task {} doesn't exist lah! You only have {len} task(s). Check your list first, then try again.",
        .index + 1
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot undo anything leh, you never do anything yet!")]
    NothingToUndo,

    #[error("Alamak, cannot read your task file {}: {source}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Alamak, cannot save to {}: {source}. Your change is kept for now, but it will be lost when you leave!",
        .path.display()
    )]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JungError {
    /// Whether this error was raised after the in-memory list already changed
    pub fn is_unsaved_change(&self) -> bool {
        matches!(self, JungError::StorageWrite { .. })
    }
}
