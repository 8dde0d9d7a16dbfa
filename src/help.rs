// File: ./src/help.rs
//! Command reference shown by `cmd` and by the repeated-error escalation.
//!
//! The table is generated from [`CommandWord`] so a new keyword cannot be
//! added without also describing it here.
use crate::parser::CommandWord;
use strum::IntoEnumIterator;

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
    pub example: String,
}

pub fn help_item(word: CommandWord) -> HelpItem {
    let (keys, desc, example) = match word {
        CommandWord::Todo => ("todo <description>", "Add a task", "todo read book"),
        CommandWord::Deadline => (
            "deadline <description> /by <dd/MM/yyyy>",
            "Add a task with a due date",
            "deadline return book /by 15/03/2024",
        ),
        CommandWord::Event => (
            "event <description> /at from <time>",
            "Add an event happening at a given time",
            "event project meeting /at from Mon 2pm to 4pm",
        ),
        CommandWord::List => ("list", "Show all tasks", "list"),
        CommandWord::Mark => ("mark <n>", "Mark task n as done", "mark 2"),
        CommandWord::Unmark => ("unmark <n>", "Mark task n as not done", "unmark 2"),
        CommandWord::Delete => ("delete <n>", "Remove task n", "delete 3"),
        CommandWord::Find => (
            "find <query>",
            "Show tasks whose description contains the query",
            "find book",
        ),
        CommandWord::Cmd => ("cmd", "Show this list of commands", "cmd"),
        CommandWord::Bye => ("bye", "Save your tasks and leave", "bye"),
    };
    HelpItem {
        keys: keys.to_string(),
        desc: desc.to_string(),
        example: example.to_string(),
    }
}

/// Reference entries in display order: adding first, then managing, then leaving.
pub fn get_command_help() -> Vec<HelpItem> {
    const ORDER: [CommandWord; 10] = [
        CommandWord::Todo,
        CommandWord::Deadline,
        CommandWord::Event,
        CommandWord::List,
        CommandWord::Mark,
        CommandWord::Unmark,
        CommandWord::Delete,
        CommandWord::Find,
        CommandWord::Cmd,
        CommandWord::Bye,
    ];
    debug_assert_eq!(CommandWord::iter().count(), ORDER.len());
    ORDER.into_iter().map(help_item).collect()
}
