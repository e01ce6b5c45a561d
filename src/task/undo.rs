//! Single-slot undo record
//!
//! Only the most recent mutation is kept. Every successful add, delete, mark
//! or unmark replaces the slot, so a second mutation makes the first one
//! unrecoverable. The slot lives in memory only and is never persisted.

use super::model::Task;
use std::fmt;

/// Kind of mutation an [`UndoableAction`] reverses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Delete,
    Mark,
    Unmark,
}

impl ActionKind {
    fn verb(self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Delete => "delete",
            ActionKind::Mark => "mark",
            ActionKind::Unmark => "unmark",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Everything needed to reverse the most recent mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoableAction {
    kind: ActionKind,
    task: Task,
    /// 0-based index the action applied at; `None` for Add, which is
    /// reversed by position (the last task)
    index: Option<usize>,
    description: String,
}

impl UndoableAction {
    /// Record an add; the task was appended at the end of the list
    pub fn added(task: Task) -> Self {
        Self::new(ActionKind::Add, task, None)
    }

    /// Record a delete of `task` from `index`
    pub fn deleted(task: Task, index: usize) -> Self {
        Self::new(ActionKind::Delete, task, Some(index))
    }

    pub fn marked(task: Task, index: usize) -> Self {
        Self::new(ActionKind::Mark, task, Some(index))
    }

    pub fn unmarked(task: Task, index: usize) -> Self {
        Self::new(ActionKind::Unmark, task, Some(index))
    }

    fn new(kind: ActionKind, task: Task, index: Option<usize>) -> Self {
        let description = format!("{} task: {}", kind, task.description());
        Self {
            kind,
            task,
            index,
            description,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Human-readable summary, e.g. `delete task: buy milk`
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_carries_no_index() {
        let action = UndoableAction::added(Task::todo("buy milk"));
        assert_eq!(action.kind(), ActionKind::Add);
        assert_eq!(action.index(), None);
        assert_eq!(action.description(), "add task: buy milk");
    }

    #[test]
    fn test_delete_keeps_original_index() {
        let action = UndoableAction::deleted(Task::todo("read"), 3);
        assert_eq!(action.kind(), ActionKind::Delete);
        assert_eq!(action.index(), Some(3));
        assert_eq!(action.task().description(), "read");
        assert_eq!(action.description(), "delete task: read");
    }
}
