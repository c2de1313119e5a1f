//! To-do list session: an ordered task list behind a four-entry menu.

use crate::core::task_list::TaskList;
use crate::core::todo;
use crate::core::types::Reply;
use crate::io::config::TodoConfig;
use crate::io::console::Console;
use crate::session::{Menu, Session};

pub fn menu(config: &TodoConfig) -> Menu<TaskList> {
    let allow_empty = config.allow_empty;
    Menu::new("=== To-Do List App ===")
        .action(
            "Add a task",
            move |tasks: &mut TaskList, console: &mut dyn Console| {
                let raw = console.read_line("Enter a new task: ")?;
                Ok(todo::add_task(tasks, &raw, allow_empty))
            },
        )
        .action("View tasks", |tasks: &mut TaskList, _: &mut dyn Console| {
            Ok(todo::list_tasks(tasks))
        })
        .action(
            "Remove a task",
            |tasks: &mut TaskList, console: &mut dyn Console| {
                if tasks.is_empty() {
                    return Ok(Reply::line(todo::NOTHING_TO_REMOVE));
                }
                console.write_line("Select a task to remove:")?;
                for line in todo::numbered(tasks) {
                    console.write_line(&line)?;
                }
                let raw = console.read_line("Enter task number to remove: ")?;
                Ok(todo::remove_task(tasks, &raw))
            },
        )
        .exit("Return to main menu")
}

/// Fresh session with an empty task list.
pub fn session(config: &TodoConfig) -> Session<TaskList> {
    Session::new(menu(config), TaskList::new())
}
