//! Ordered, position-addressed task store.

use crate::core::error::{CollectionError, Result};

/// A to-do entry. It has no identity beyond its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Tasks in insertion order. Duplicates are allowed and there is no capacity
/// bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the end. Always succeeds.
    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// `(position, task)` pairs with 1-based positions, in insertion order.
    pub fn get_all(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| (index + 1, task))
    }

    /// Remove the task at 1-based `position`, shifting later tasks down by one.
    ///
    /// Leaves the list untouched and returns `IndexOutOfRange` unless
    /// `1 <= position <= len`.
    pub fn remove_at(&mut self, position: i64) -> Result<Task> {
        let index = usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .filter(|&index| index < self.tasks.len())
            .ok_or(CollectionError::IndexOutOfRange {
                position,
                len: self.tasks.len(),
            })?;
        Ok(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
