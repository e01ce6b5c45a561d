//! Date-time patterns shared by the parser, the task model and storage
//!
//! All date-times are naive local times; no timezone is ever attached.

use chrono::NaiveDateTime;

/// Pattern accepted from the user and read from storage (`d/M/yyyy HHmm`)
///
/// chrono accepts one or two digits for `%d` and `%m` when parsing, so
/// `2/12/2025 1800` and `02/12/2025 1800` both parse.
pub const INPUT_FORMAT: &str = "%d/%m/%Y %H%M";

/// Pattern written to storage: same shape as input, without zero padding
pub const STORAGE_FORMAT: &str = "%-d/%-m/%Y %H%M";

/// Friendlier pattern used for display (e.g. `2 Dec 2025, 6:00 PM`)
pub const DISPLAY_FORMAT: &str = "%-d %b %Y, %-I:%M %p";

/// Parse a date-time in the `d/M/yyyy HHmm` pattern
///
/// # Arguments
/// * `raw` - Date-time string, surrounding whitespace is ignored
///
/// # Returns
/// The parsed date-time, or `None` if the string does not match the pattern
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), INPUT_FORMAT).ok()
}

/// Format a date-time for the storage file
pub fn format_for_storage(date_time: &NaiveDateTime) -> String {
    date_time.format(STORAGE_FORMAT).to_string()
}

/// Format a date-time for display to the user
pub fn format_for_display(date_time: &NaiveDateTime) -> String {
    date_time.format(DISPLAY_FORMAT).to_string()
}
