//! Undo handler

use crate::Jung;
use crate::error::Result;
use crate::formatting;
use tracing::info;

impl Jung {
    /// Reverses the most recent add, delete, mark or unmark.
    pub fn handle_undo(&mut self) -> Result<String> {
        let action = self.tasks.undo()?;
        info!("Undone: {}", action.description());
        Ok(formatting::format_undone(action.description()))
    }
}
