// File: ./src/error.rs
//! Error kinds produced while interpreting commands and touching the store.
//!
//! Every variant except `CorruptStore` and `StorageUnavailable` is a usage
//! error: the interpreter turns it into a reply and the session carries on.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DukeError {
    #[error("OOPS!!! I'm sorry, but I don't know what that means :-(")]
    UnknownCommand,

    /// `todo`, `deadline` or `event` without a description. Carries the command word.
    #[error("OOPS!!! The description of a {0} cannot be empty.")]
    EmptyDescription(String),

    #[error("OOPS!!! Invalid search term. Try adding a task description.")]
    EmptySearchTerm,

    /// `mark`, `unmark` or `delete` without a parseable position. Carries the command word.
    #[error("OOPS!!! You have to choose a task to {0}.")]
    MissingTarget(String),

    #[error("OOPS!!! Task {index} does not exist. You have {count} tasks in the list.")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("Please input date in format of dd/MM/yyyy")]
    InvalidDateFormat,

    #[error("OOPS!!! An event needs a time. Try: event <description> /at from <time>")]
    MissingEventTime,

    #[error("Invalid command used. Enter 'cmd' for a list of commands")]
    UnexpectedArgument,

    #[error("OOPS!!! No such task matches your description.")]
    NoMatchingTask,

    #[error("Stored task list is corrupt at line {line}: {reason}")]
    CorruptStore { line: usize, reason: String },

    #[error("OOPS!!! I could not save your tasks: {0}")]
    StorageUnavailable(String),
}

impl DukeError {
    /// True for the storage failures that are not caused by the command text.
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            Self::CorruptStore { .. } | Self::StorageUnavailable(_)
        )
    }
}

impl From<std::io::Error> for DukeError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DukeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_names_the_command() {
        let err = DukeError::EmptyDescription("todo".into());
        assert_eq!(
            err.to_string(),
            "OOPS!!! The description of a todo cannot be empty."
        );
    }

    #[test]
    fn index_out_of_range_reports_count() {
        let err = DukeError::IndexOutOfRange { index: 4, count: 2 };
        assert_eq!(
            err.to_string(),
            "OOPS!!! Task 4 does not exist. You have 2 tasks in the list."
        );
    }

    #[test]
    fn corrupt_store_reports_line() {
        let err = DukeError::CorruptStore {
            line: 3,
            reason: "unknown task kind 'Q'".into(),
        };
        assert_eq!(
            err.to_string(),
            "Stored task list is corrupt at line 3: unknown task kind 'Q'"
        );
        assert!(err.is_storage_error());
    }

    #[test]
    fn io_errors_become_storage_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DukeError = io.into();
        assert!(matches!(err, DukeError::StorageUnavailable(ref m) if m == "denied"));
        assert!(!DukeError::UnknownCommand.is_storage_error());
    }
}
