// File: ./src/model/display.rs
use crate::model::item::{DISPLAY_DATE_FORMAT, Task, TaskKind};
use std::fmt;

pub trait TaskDisplay {
    fn kind_symbol(&self) -> String;
    fn checkbox_symbol(&self) -> &'static str;
    fn suffix(&self) -> String;
}

impl TaskDisplay for Task {
    fn kind_symbol(&self) -> String {
        format!("[{}]", self.kind().marker())
    }

    fn checkbox_symbol(&self) -> &'static str {
        if self.is_done() { "[X]" } else { "[ ]" }
    }

    fn suffix(&self) -> String {
        match self.kind() {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline(due) => format!(" (by: {})", due.format(DISPLAY_DATE_FORMAT)),
            TaskKind::Event(when) => format!(" (at: {})", when),
        }
    }
}

/// One-line form: `[<kind>][<X or space>] <description><suffix>`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{}",
            self.kind_symbol(),
            self.checkbox_symbol(),
            self.description(),
            self.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn todo_renders_without_suffix() {
        assert_eq!(Task::todo("read book").to_string(), "[T][ ] read book");
    }

    #[test]
    fn done_marker_is_x() {
        let mut t = Task::todo("read book");
        t.set_done(true);
        assert_eq!(t.to_string(), "[T][X] read book");
    }

    #[test]
    fn deadline_uses_human_date() {
        let due = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            Task::deadline("submit", due).to_string(),
            "[D][ ] submit (by: Mar 5 2024)"
        );
    }

    #[test]
    fn event_shows_time_text_verbatim() {
        let t = Task::event("project meeting", "Mon 2pm to 4pm");
        assert_eq!(t.to_string(), "[E][ ] project meeting (at: Mon 2pm to 4pm)");
    }
}
