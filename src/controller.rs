// File: src/controller.rs
//! The command interpreter.
//!
//! Every front end (console, chat window, tests) hands a line of text to
//! [`Interpreter::process`] and shows the returned string verbatim. The
//! interpreter never prints.
use crate::error::{DukeError, Result};
use crate::model::{Task, TaskKind, TaskList};
use crate::parser::{Command, parse_command};
use crate::response;
use crate::storage::Persistence;

/// Unknown commands in a row before the next line is answered with help.
pub const DEFAULT_HELP_THRESHOLD: u32 = 2;

pub struct Interpreter {
    tasks: TaskList,
    storage: Box<dyn Persistence>,
    consecutive_unknown: u32,
    help_threshold: u32,
    finished: bool,
}

impl Interpreter {
    pub fn new(tasks: TaskList, storage: Box<dyn Persistence>) -> Self {
        Self {
            tasks,
            storage,
            consecutive_unknown: 0,
            help_threshold: DEFAULT_HELP_THRESHOLD,
            finished: false,
        }
    }

    /// Loads the task list from `storage` and builds an interpreter around it.
    ///
    /// A corrupt store is returned as an error; callers are expected to abort.
    pub fn open(storage: Box<dyn Persistence>) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self::new(tasks, storage))
    }

    /// Overrides how many unknown commands in a row trigger help. Zero is treated as one.
    pub fn with_help_threshold(mut self, threshold: u32) -> Self {
        self.help_threshold = threshold.max(1);
        self
    }

    pub fn greet(&self) -> String {
        response::greeting()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// True once a `bye` has been handled, whether or not the save worked.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ends the session as `bye` does, bypassing the command parser.
    /// Used by front ends when their input closes.
    pub fn finish(&mut self) -> String {
        match self.execute(Command::Bye) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("{}", e);
                response::error(&e)
            }
        }
    }

    pub fn process(&mut self, line: &str) -> String {
        if self.consecutive_unknown >= self.help_threshold {
            self.consecutive_unknown = 0;
            log::debug!("Repeated unknown commands, answering with help");
            return response::help();
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(DukeError::UnknownCommand) => {
                self.consecutive_unknown += 1;
                log::debug!(
                    "Unknown command {:?} ({} in a row)",
                    line,
                    self.consecutive_unknown
                );
                return response::error(&DukeError::UnknownCommand);
            }
            Err(e) => return response::error(&e),
        };

        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_storage_error() {
                    log::warn!("{}", e);
                }
                response::error(&e)
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Bye => {
                self.finished = true;
                self.storage.save(&self.tasks)?;
                Ok(response::goodbye())
            }
            Command::List => Ok(response::task_listing(&self.tasks)),
            Command::Mark(index) => self.tasks.mark_done(index).map(response::marked_done),
            Command::Unmark(index) => self.tasks.mark_undone(index).map(response::marked_undone),
            Command::Delete(index) => {
                let removed = self.tasks.remove(index)?;
                Ok(response::task_removed(&removed, self.tasks.count()))
            }
            Command::Todo { description } => Ok(self.add(Task::new(description, TaskKind::Todo))),
            Command::Deadline { description, due } => {
                Ok(self.add(Task::new(description, TaskKind::Deadline(due))))
            }
            Command::Event { description, when } => {
                Ok(self.add(Task::new(description, TaskKind::Event(when))))
            }
            Command::Find(query) => {
                let matches = self.tasks.find_by_description(&query);
                if matches.is_empty() {
                    return Err(DukeError::NoMatchingTask);
                }
                Ok(response::matching_tasks(&matches))
            }
            Command::Commands => Ok(response::command_list()),
        }
    }

    fn add(&mut self, task: Task) -> String {
        let reply = response::task_added(&task, self.tasks.count() + 1);
        self.tasks.add(task);
        reply
    }
}
