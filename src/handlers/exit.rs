//! Exit handler

use crate::Jung;
use crate::formatting;

impl Jung {
    /// Produces the farewell; ending the loop is signalled via `should_exit`.
    pub fn handle_exit(&self) -> String {
        formatting::FAREWELL.to_string()
    }
}
