// File: ./src/model/list.rs
//! Ordered task collection addressed by 1-based position.
use crate::error::{DukeError, Result};
use crate::model::item::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: i64) -> Result<&Task> {
        let slot = self.slot(index)?;
        Ok(&self.tasks[slot])
    }

    /// Marking is idempotent; only the position is checked.
    pub fn mark_done(&mut self, index: i64) -> Result<&Task> {
        self.set_done(index, true)
    }

    pub fn mark_undone(&mut self, index: i64) -> Result<&Task> {
        self.set_done(index, false)
    }

    /// Removes and returns the task. Later tasks move up one position.
    pub fn remove(&mut self, index: i64) -> Result<Task> {
        let slot = self.slot(index)?;
        Ok(self.tasks.remove(slot))
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `(position, task)` pairs in list order whose description contains `query`,
    /// ignoring case. An empty result is not an error here.
    pub fn find_by_description(&self, query: &str) -> Vec<(usize, &Task)> {
        self.iter().filter(|(_, task)| task.matches(query)).collect()
    }

    /// Iterates `(position, task)` pairs with 1-based positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    fn set_done(&mut self, index: i64, done: bool) -> Result<&Task> {
        let slot = self.slot(index)?;
        let task = &mut self.tasks[slot];
        task.set_done(done);
        Ok(task)
    }

    fn slot(&self, index: i64) -> Result<usize> {
        let count = self.tasks.len();
        if index < 1 || index as u64 > count as u64 {
            return Err(DukeError::IndexOutOfRange { index, count });
        }
        Ok((index - 1) as usize)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from(vec![
            Task::todo("buy milk"),
            Task::todo("finish task"),
            Task::todo("call mum"),
        ])
    }

    #[test]
    fn positions_are_one_based() {
        let list = sample();
        assert_eq!(list.get(1).unwrap().description(), "buy milk");
        assert_eq!(list.get(3).unwrap().description(), "call mum");
    }

    #[test]
    fn out_of_range_positions_fail() {
        let mut list = sample();
        assert_eq!(
            list.get(0),
            Err(DukeError::IndexOutOfRange { index: 0, count: 3 })
        );
        assert!(list.get(4).is_err());
        assert!(list.mark_done(-1).is_err());
        assert!(list.remove(9).is_err());
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn marking_twice_is_not_an_error() {
        let mut list = sample();
        list.mark_done(2).unwrap();
        assert!(list.mark_done(2).unwrap().is_done());
        assert!(!list.mark_undone(2).unwrap().is_done());
        assert!(!list.mark_undone(2).unwrap().is_done());
    }

    #[test]
    fn remove_shifts_later_tasks() {
        let mut list = sample();
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.description(), "buy milk");
        assert_eq!(list.count(), 2);
        assert_eq!(list.get(1).unwrap().description(), "finish task");
    }

    #[test]
    fn find_keeps_original_positions() {
        let list = sample();
        let hits = list.find_by_description("TASK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 2);
        assert!(list.find_by_description("nomatch").is_empty());
    }
}
