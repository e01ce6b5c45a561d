//! Add handler for todo, deadline and event commands

use crate::Jung;
use crate::error::Result;
use crate::formatting;
use crate::task::Task;
use tracing::info;

impl Jung {
    /// Appends a new task to the end of the list and reports the new total.
    pub fn handle_add(&mut self, task: Task) -> Result<String> {
        let added = self.tasks.add(task)?;
        info!("Added task: {}", added.serialize());
        Ok(formatting::format_added(&added, self.tasks.len()))
    }
}
