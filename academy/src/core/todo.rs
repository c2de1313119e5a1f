//! Handlers for the to-do list session.

use tracing::{debug, warn};

use crate::core::error::CollectionError;
use crate::core::parse::parse_position;
use crate::core::task_list::{Task, TaskList};
use crate::core::types::Reply;

pub const ADDED: &str = "Task added!";
pub const EMPTY_REJECTED: &str = "Task description cannot be empty.";
pub const NO_TASKS: &str = "No tasks available.";
pub const NOTHING_TO_REMOVE: &str = "No tasks to remove.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
pub const INVALID_POSITION: &str = "Invalid task number.";

/// Append the trimmed description.
///
/// Empty descriptions are accepted unless `allow_empty` is false.
pub fn add_task(list: &mut TaskList, raw: &str, allow_empty: bool) -> Reply {
    let description = raw.trim();
    if description.is_empty() && !allow_empty {
        warn!("rejected empty task description");
        return Reply::line(EMPTY_REJECTED);
    }
    list.append(Task::new(description));
    debug!(len = list.len(), "task appended");
    Reply::line(ADDED)
}

/// Numbered task lines, without a heading.
pub fn numbered(list: &TaskList) -> Reply {
    list.get_all()
        .map(|(position, task)| format!("{position}. {}", task.description))
        .collect()
}

pub fn list_tasks(list: &TaskList) -> Reply {
    if list.is_empty() {
        return Reply::line(NO_TASKS);
    }
    std::iter::once("Your tasks:".to_string())
        .chain(numbered(list))
        .collect()
}

/// Remove the task whose 1-based position is written in `raw`.
///
/// Callers check [`TaskList::is_empty`] first and report [`NOTHING_TO_REMOVE`]
/// without prompting.
pub fn remove_task(list: &mut TaskList, raw: &str) -> Reply {
    let removed = parse_position(raw).and_then(|position| list.remove_at(position));
    match removed {
        Ok(task) => {
            debug!(len = list.len(), "task removed");
            Reply::line(format!("Removed task: {}", task.description))
        }
        Err(CollectionError::IndexOutOfRange { position, len }) => {
            warn!(position, len, "task position out of range");
            Reply::line(INVALID_POSITION)
        }
        Err(err) => {
            warn!(%err, "task position not a number");
            Reply::line(INVALID_NUMBER)
        }
    }
}
