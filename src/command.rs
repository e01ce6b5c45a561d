//! Parsed commands and their dispatch
//!
//! A [`Command`] carries only the parameters the parser extracted. Running a
//! command is a single `match` in [`Jung::execute`] that hands each variant to
//! its handler in `crate::handlers`.

use crate::Jung;
use crate::error::Result;
use crate::task::Task;
use chrono::NaiveDateTime;

/// One user instruction, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `bye`
    Exit,
    /// `list`
    List,
    /// `todo <desc>`
    AddTodo { description: String },
    /// `deadline <desc> /by <datetime>`
    AddDeadline {
        description: String,
        by: NaiveDateTime,
    },
    /// `event <desc> /from <start> /to <end>`
    AddEvent {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// `mark <n>`, holding the 0-based index
    Mark { index: usize },
    /// `unmark <n>`, holding the 0-based index
    Unmark { index: usize },
    /// `delete <n>`, holding the 0-based index
    Delete { index: usize },
    /// `find <keyword>`
    Find { keyword: String },
    /// `undo`
    Undo,
}

impl Command {
    /// Whether running this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Whether this command changes the task list
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::AddTodo { .. }
                | Command::AddDeadline { .. }
                | Command::AddEvent { .. }
                | Command::Mark { .. }
                | Command::Unmark { .. }
                | Command::Delete { .. }
                | Command::Undo
        )
    }
}

impl Jung {
    /// Run a parsed command against the session's task list
    ///
    /// # Returns
    /// The reply message on success
    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Exit => Ok(self.handle_exit()),
            Command::List => Ok(self.handle_list()),
            Command::AddTodo { description } => self.handle_add(Task::todo(description)),
            Command::AddDeadline { description, by } => {
                self.handle_add(Task::deadline(description, by))
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => self.handle_add(Task::event(description, from, to)),
            Command::Mark { index } => self.handle_mark(index),
            Command::Unmark { index } => self.handle_unmark(index),
            Command::Delete { index } => self.handle_delete(index),
            Command::Find { keyword } => Ok(self.handle_find(&keyword)),
            Command::Undo => self.handle_undo(),
        }
    }
}
