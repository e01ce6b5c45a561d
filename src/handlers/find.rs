//! Find handler

use crate::Jung;
use crate::formatting;
use tracing::debug;

impl Jung {
    /// Case-insensitive search over task descriptions. Read-only: nothing is
    /// saved and the undo slot is left alone.
    pub fn handle_find(&self, keyword: &str) -> String {
        let matches = self.tasks.find(keyword);
        debug!("find '{}' matched {} task(s)", keyword, matches.len());
        formatting::format_find_results(&matches)
    }
}
