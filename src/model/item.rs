// File: ./src/model/item.rs
use chrono::NaiveDate;

/// Date layout accepted from the user in `deadline ... /by <date>`.
pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Date layout used in the durable store.
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date layout shown to the user, e.g. "Mar 15 2024".
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d %Y";

/// Kind-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline(NaiveDate),
    /// Free-form time text, kept verbatim (e.g. "Monday 2pm to 4pm").
    Event(String),
}

impl TaskKind {
    pub fn marker(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Builds a pending task. Callers guarantee a non-blank description.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline(due))
    }

    pub fn event(description: impl Into<String>, when: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Event(when.into()))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Case-insensitive substring match on the description.
    pub fn matches(&self, query: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tasks_start_pending() {
        let t = Task::todo("read book");
        assert!(!t.is_done());
        assert_eq!(t.kind().marker(), 'T');
    }

    #[test]
    fn markers_follow_kind() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Task::deadline("x", due).kind().marker(), 'D');
        assert_eq!(Task::event("x", "Monday").kind().marker(), 'E');
    }

    #[test]
    fn matching_ignores_case() {
        let t = Task::todo("Finish Task report");
        assert!(t.matches("task"));
        assert!(t.matches("REPORT"));
        assert!(!t.matches("milk"));
    }
}
