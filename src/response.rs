// File: ./src/response.rs
//! Reply strings for every outcome. Pure: no I/O, no mutation.
//!
//! Each line of a reply is indented with a tab, the way the chat bubbles and
//! the console both expect it.
use crate::error::DukeError;
use crate::help::get_command_help;
use crate::model::{Task, TaskList};

/// Prefixes every line of `s` with a tab.
pub fn wrap(s: &str) -> String {
    s.lines()
        .map(|line| format!("\t{}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn greeting() -> String {
    wrap("Hello! I'm Duke\nWhat can I do for you?")
}

pub fn goodbye() -> String {
    wrap("Bye. Hope to see you again soon!")
}

pub fn error(err: &DukeError) -> String {
    wrap(&err.to_string())
}

/// Full command reference, as shown by `cmd`.
pub fn command_list() -> String {
    let mut s = String::from("Here are the commands I understand:");
    for item in get_command_help() {
        s.push_str(&format!(
            "\n{}\n    {} (e.g. {})",
            item.keys, item.desc, item.example
        ));
    }
    wrap(&s)
}

/// Shown after repeated unknown commands.
pub fn help() -> String {
    let mut s = wrap("Looks like you're stuck. Let me help!");
    s.push('\n');
    s.push_str(&command_list());
    s
}

pub fn task_added(task: &Task, count: usize) -> String {
    wrap(&format!(
        "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
        task, count
    ))
}

pub fn task_removed(task: &Task, count: usize) -> String {
    wrap(&format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
        task, count
    ))
}

pub fn marked_done(task: &Task) -> String {
    wrap(&format!("Nice! I've marked this task as done:\n  {}", task))
}

pub fn marked_undone(task: &Task) -> String {
    wrap(&format!(
        "OK, I've marked this task as not done yet:\n  {}",
        task
    ))
}

pub fn task_listing(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return wrap("Your list is empty. Add a task with 'todo', 'deadline' or 'event'.");
    }
    let mut s = String::from("Here are the tasks in your list:");
    for (position, task) in tasks.iter() {
        s.push_str(&format!("\n{}. {}", position, task));
    }
    wrap(&s)
}

pub fn matching_tasks(matches: &[(usize, &Task)]) -> String {
    let mut s = String::from("Here are the matching tasks in your list:");
    for (position, task) in matches {
        s.push_str(&format!("\n{}. {}", position, task));
    }
    wrap(&s)
}
