//! Task domain model
//!
//! This module contains the task entities and the in-memory task list:
//! - `model`: the `Task` entity and its Todo / Deadline / Event variants
//! - `task_list`: ordered list with add/delete/mark/unmark/find and undo
//! - `undo`: the single-slot undo record
//! - `dates`: date-time patterns for input, storage and display

pub mod dates;
mod model;
mod task_list;
mod undo;

pub use model::{FIELD_DELIMITER, Task, TaskKind, TaskType};
pub use task_list::TaskList;
pub use undo::{ActionKind, UndoableAction};
