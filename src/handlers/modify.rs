//! Mark, unmark and delete handlers

use crate::Jung;
use crate::error::Result;
use crate::formatting;
use tracing::info;

impl Jung {
    /// Marks the task at `index` (0-based) as done.
    pub fn handle_mark(&mut self, index: usize) -> Result<String> {
        let task = self.tasks.mark(index)?;
        info!("Marked task {}", index + 1);
        Ok(formatting::format_marked(&task))
    }

    /// Marks the task at `index` (0-based) as not done.
    pub fn handle_unmark(&mut self, index: usize) -> Result<String> {
        let task = self.tasks.unmark(index)?;
        info!("Unmarked task {}", index + 1);
        Ok(formatting::format_unmarked(&task))
    }

    /// Removes the task at `index` (0-based); later tasks move up by one.
    pub fn handle_delete(&mut self, index: usize) -> Result<String> {
        let removed = self.tasks.delete(index)?;
        info!("Deleted task {}: {}", index + 1, removed.serialize());
        Ok(formatting::format_deleted(&removed, self.tasks.len()))
    }
}
