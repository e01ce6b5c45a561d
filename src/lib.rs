//! Jung - Personal Task Tracking Assistant
//!
//! This library is the command core shared by Jung's front-ends. It parses
//! free-text commands, applies them to an in-memory task list with
//! single-level undo, and persists the list to a flat text file after every
//! change.
//!
//! # Architecture
//!
//! - **Session Layer**: [`Jung`] - The request/response entry point used by a UI
//! - **Command Layer**: `parser`, `command` and `handlers` - Parsing and dispatch
//! - **Domain Layer**: `task` module - Tasks, the task list and undo
//! - **Persistence Layer**: `storage` module - Line-oriented `" | "` records
//!
//! # Example
//!
//! ```no_run
//! use jung::{Jung, JungConfig};
//!
//! let mut jung = Jung::new(&JungConfig::default());
//! println!("{}", jung.initialize());
//!
//! let reply = jung.process_command("todo buy milk");
//! assert!(!reply.is_error);
//! println!("{}", reply.message);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod parser;
pub mod storage;
pub mod task;

use std::path::Path;
use tracing::{debug, error, info, warn};

// Re-export commonly used types
pub use command::Command;
pub use config::{EventPolicy, JungConfig};
pub use error::JungError;
pub use parser::Parser;
pub use storage::{LoadReport, Storage};
pub use task::{Task, TaskKind, TaskList, TaskType};

/// Reply to one processed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to show the user
    pub message: String,
    /// Whether the command failed
    pub is_error: bool,
    /// Whether the session should end after showing the message
    pub should_exit: bool,
}

impl CommandResult {
    fn success(message: String, should_exit: bool) -> Self {
        Self {
            message,
            is_error: false,
            should_exit,
        }
    }

    fn failure(err: &JungError) -> Self {
        Self {
            message: err.to_string(),
            is_error: true,
            should_exit: false,
        }
    }
}

/// One Jung session: the task list, its storage and the parser
///
/// Construct once per process and feed it one line at a time. The session is
/// not meant to be shared between threads; a front-end with its own event
/// loop must run commands one after another.
pub struct Jung {
    pub(crate) tasks: TaskList,
    parser: Parser,
    load_warnings: Vec<String>,
}

impl Jung {
    /// Create a session, loading tasks from the configured data file
    ///
    /// A missing file is created empty. Corrupted lines are skipped, and a
    /// file that cannot be read at all leaves the session with an empty
    /// list; both cases are reported in the greeting from [`Jung::initialize`].
    ///
    /// # Arguments
    /// * `config` - Data file location and parser limits
    pub fn new(config: &JungConfig) -> Self {
        let storage = Storage::new(&config.data_file);
        let mut load_warnings = Vec::new();

        let loaded = match storage.load() {
            Ok(report) => {
                if report.corrupted > 0 {
                    warn!(
                        "{} corrupted line(s) skipped while loading {}",
                        report.corrupted,
                        storage.file_path().display()
                    );
                    load_warnings.push(format!(
                        "Eh, {} line(s) in your task file corrupted already. I skipped them.",
                        report.corrupted
                    ));
                }
                report.tasks
            }
            Err(e) => {
                error!("Failed to load tasks: {}", e);
                load_warnings.push(format!("{}. Starting with an empty list.", e));
                Vec::new()
            }
        };

        Self {
            tasks: TaskList::with_storage(loaded, storage),
            parser: Parser::new(config),
            load_warnings,
        }
    }

    /// Create a session with default settings and a custom data file
    pub fn with_data_file(data_file: impl AsRef<Path>) -> Self {
        let config = JungConfig {
            data_file: data_file.as_ref().to_path_buf(),
            ..JungConfig::default()
        };
        Self::new(&config)
    }

    /// Greeting to show before the first command
    pub fn initialize(&self) -> String {
        formatting::format_greeting(&self.load_warnings)
    }

    /// Parse and run one line of user input
    ///
    /// Every failure is turned into a reply with `is_error` set; nothing here
    /// ends the process. Only `bye` sets `should_exit`.
    pub fn process_command(&mut self, raw: &str) -> CommandResult {
        let command = match self.parser.parse(raw) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected input {:?}: {}", raw, e);
                return CommandResult::failure(&e);
            }
        };

        let should_exit = command.is_exit();
        let mutating = command.is_mutating();
        match self.execute(command) {
            Ok(message) => {
                if mutating {
                    info!("Saved after {:?}", raw.trim());
                }
                CommandResult::success(message, should_exit)
            }
            Err(e) => {
                if e.is_unsaved_change() {
                    error!("{}", e);
                } else {
                    debug!("Command failed: {}", e);
                }
                CommandResult::failure(&e)
            }
        }
    }

    /// Current task list
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}
