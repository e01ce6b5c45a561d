//! List handler

use crate::Jung;
use crate::formatting;

impl Jung {
    /// Shows every task with its 1-based number.
    pub fn handle_list(&self) -> String {
        formatting::format_task_list(self.tasks.tasks())
    }
}
