use super::dates;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Field delimiter of a storage record
pub const FIELD_DELIMITER: &str = " | ";

/// Task type with its one-letter symbol
///
/// The symbol is shown in the display glyph (`[T]`) and written as the first
/// field of a storage record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Plain to-do with no date
    Todo,
    /// Task that must be done by a date-time
    Deadline,
    /// Task spanning a start and an end date-time
    Event,
}

impl TaskType {
    /// One-letter symbol used in display and storage
    pub fn symbol(self) -> char {
        match self {
            TaskType::Todo => 'T',
            TaskType::Deadline => 'D',
            TaskType::Event => 'E',
        }
    }

    /// Look up a task type by its symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'T' => Some(TaskType::Todo),
            'D' => Some(TaskType::Deadline),
            'E' => Some(TaskType::Event),
            _ => None,
        }
    }

    /// Number of date-time fields a task of this type carries
    pub fn date_field_count(self) -> usize {
        match self {
            TaskType::Todo => 0,
            TaskType::Deadline => 1,
            TaskType::Event => 2,
        }
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => TaskType::from_symbol(symbol)
                .ok_or_else(|| format!("Unknown task type '{}'. Valid types are: T, D, E", s)),
            _ => Err(format!("Unknown task type '{}'. Valid types are: T, D, E", s)),
        }
    }
}

/// Variant-specific payload of a task
///
/// The variant decides how many date-time fields the task has and therefore
/// the shape of its display string and storage record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        /// When the task is due
        by: NaiveDateTime,
    },
    Event {
        /// When the event begins
        from: NaiveDateTime,
        /// When the event ends
        to: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn task_type(&self) -> TaskType {
        match self {
            TaskKind::Todo => TaskType::Todo,
            TaskKind::Deadline { .. } => TaskType::Deadline,
            TaskKind::Event { .. } => TaskType::Event,
        }
    }
}

/// A single tracked task
///
/// Description and kind are fixed at construction; only the done flag
/// changes afterwards. The description is expected to be non-empty after
/// trimming; the parser and the storage loader check this before building a
/// task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a task that is not yet done
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    /// Create a plain to-do
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a task due by the given date-time
    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    /// Create an event spanning `from` to `to`
    ///
    /// Ordering of `from` and `to` is not checked here; that is a parser
    /// policy (see `EventPolicy`).
    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn task_type(&self) -> TaskType {
        self.kind.task_type()
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// Completion glyph: `X` when done, a space otherwise
    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// Human-readable form, e.g. `[D][ ] return book (by: 2 Dec 2025, 6:00 PM)`
    pub fn display(&self) -> String {
        let head = format!(
            "[{}][{}] {}",
            self.task_type().symbol(),
            self.status_icon(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { by } => {
                format!("{} (by: {})", head, dates::format_for_display(by))
            }
            TaskKind::Event { from, to } => format!(
                "{} (from: {} to: {})",
                head,
                dates::format_for_display(from),
                dates::format_for_display(to)
            ),
        }
    }

    /// Storage record, e.g. `D | 0 | return book | 2/12/2025 1800`
    ///
    /// The description is written as-is; a description containing the
    /// delimiter produces a record that will not load back.
    pub fn serialize(&self) -> String {
        let mut fields = vec![
            self.task_type().symbol().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            self.description.clone(),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => fields.push(dates::format_for_storage(by)),
            TaskKind::Event { from, to } => {
                fields.push(dates::format_for_storage(from));
                fields.push(dates::format_for_storage(to));
            }
        }
        fields.join(FIELD_DELIMITER)
    }

    /// Parse a storage record back into a task
    ///
    /// # Arguments
    /// * `line` - One line of the storage file
    ///
    /// # Returns
    /// The task, or a short reason why the line is corrupted
    pub fn deserialize(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() < 3 {
            return Err(format!("expected at least 3 fields, found {}", fields.len()));
        }

        let task_type: TaskType = fields[0].trim().parse()?;

        let done = match fields[1].trim() {
            "0" => false,
            "1" => true,
            other => return Err(format!("invalid done flag '{}'", other)),
        };

        let description = fields[2].trim();
        if description.is_empty() {
            return Err("empty description".to_string());
        }

        let wanted = 3 + task_type.date_field_count();
        if fields.len() < wanted {
            return Err(format!(
                "type {} needs {} fields, found {}",
                task_type.symbol(),
                wanted,
                fields.len()
            ));
        }

        let date_at = |i: usize| {
            dates::parse_date_time(fields[i])
                .ok_or_else(|| format!("unparsable date-time '{}'", fields[i]))
        };

        let kind = match task_type {
            TaskType::Todo => TaskKind::Todo,
            TaskType::Deadline => TaskKind::Deadline { by: date_at(3)? },
            TaskType::Event => TaskKind::Event {
                from: date_at(3)?,
                to: date_at(4)?,
            },
        };

        let mut task = Task::new(description, kind);
        task.done = done;
        Ok(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, month: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_todo_display_and_serialize() {
        let mut task = Task::todo("buy milk");
        assert_eq!(task.display(), "[T][ ] buy milk");
        assert_eq!(task.serialize(), "T | 0 | buy milk");

        task.mark_done();
        assert_eq!(task.display(), "[T][X] buy milk");
        assert_eq!(task.serialize(), "T | 1 | buy milk");
    }

    #[test]
    fn test_deadline_display_and_serialize() {
        let task = Task::deadline("return book", at(2, 12, 18, 0));
        assert_eq!(
            task.display(),
            "[D][ ] return book (by: 2 Dec 2025, 6:00 PM)"
        );
        assert_eq!(task.serialize(), "D | 0 | return book | 2/12/2025 1800");
    }

    #[test]
    fn test_event_display_and_serialize() {
        let task = Task::event("trip", at(2, 12, 9, 0), at(3, 12, 18, 0));
        assert_eq!(
            task.display(),
            "[E][ ] trip (from: 2 Dec 2025, 9:00 AM to: 3 Dec 2025, 6:00 PM)"
        );
        assert_eq!(
            task.serialize(),
            "E | 0 | trip | 2/12/2025 0900 | 3/12/2025 1800"
        );
    }

    #[test]
    fn test_deserialize_reconstructs_each_kind() {
        let mut done_event = Task::event("trip", at(2, 12, 9, 0), at(3, 12, 18, 0));
        done_event.mark_done();
        let tasks = vec![
            Task::todo("buy milk"),
            Task::deadline("return book", at(2, 12, 18, 0)),
            done_event,
        ];

        for task in tasks {
            let restored = Task::deserialize(&task.serialize()).unwrap();
            assert_eq!(restored, task);
        }
    }

    #[test]
    fn test_deserialize_rejects_corrupted_lines() {
        assert!(Task::deserialize("").is_err());
        assert!(Task::deserialize("T | 0").is_err());
        assert!(Task::deserialize("X | 0 | mystery").is_err());
        assert!(Task::deserialize("T | 2 | bad flag").is_err());
        assert!(Task::deserialize("T | 0 |   ").is_err());
        assert!(Task::deserialize("D | 0 | return book").is_err());
        assert!(Task::deserialize("D | 0 | return book | someday").is_err());
        assert!(Task::deserialize("E | 0 | trip | 2/12/2025 0900").is_err());
    }

    #[test]
    fn test_task_type_symbols() {
        for task_type in [TaskType::Todo, TaskType::Deadline, TaskType::Event] {
            assert_eq!(TaskType::from_symbol(task_type.symbol()), Some(task_type));
        }
        assert_eq!("D".parse::<TaskType>(), Ok(TaskType::Deadline));
        assert!("DD".parse::<TaskType>().is_err());
        assert!("".parse::<TaskType>().is_err());
    }
}
