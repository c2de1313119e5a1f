//! End-to-end scenarios for the to-do and contact sessions.
//!
//! Drives stores, handlers and full sessions through the public API with a
//! scripted console.

use academy::apps::{contacts, todo};
use academy::core::contact_book::ContactBook;
use academy::core::contacts::{add_contact, search_contact};
use academy::core::error::CollectionError;
use academy::core::task_list::{Task, TaskList};
use academy::core::todo::{list_tasks, numbered};
use academy::io::config::{ContactsConfig, TodoConfig};
use academy::session::{SessionState, Termination};
use academy::test_support::ScriptedConsole;

fn lines(reply: &academy::core::types::Reply) -> Vec<String> {
    reply.lines().to_vec()
}

fn two_tasks() -> TaskList {
    let mut list = TaskList::new();
    list.append(Task::new("Buy milk"));
    list.append(Task::new("Walk dog"));
    list
}

#[test]
fn add_two_tasks_then_list() {
    let list = two_tasks();
    assert_eq!(lines(&numbered(&list)), vec!["1. Buy milk", "2. Walk dog"]);
    assert_eq!(lines(&list_tasks(&list))[0], "Your tasks:");
}

#[test]
fn remove_first_task_renumbers_rest() {
    let mut list = two_tasks();
    let removed = list.remove_at(1).expect("remove");
    assert_eq!(removed.description, "Buy milk");
    assert_eq!(lines(&numbered(&list)), vec!["1. Walk dog"]);
}

#[test]
fn remove_past_end_is_out_of_range_and_keeps_list() {
    let mut list = two_tasks();
    assert_eq!(
        list.remove_at(5),
        Err(CollectionError::IndexOutOfRange {
            position: 5,
            len: 2
        })
    );
    assert_eq!(list, two_tasks());
}

#[test]
fn re_adding_contact_overwrites_phone() {
    let mut book = ContactBook::new();
    add_contact(&mut book, "Ana", "555-1", true);
    add_contact(&mut book, "Ana", "555-2", true);
    assert_eq!(book.get("Ana"), Ok("555-2"));
    assert_eq!(lines(&search_contact(&book, "Ana")), vec!["Ana: 555-2"]);
}

#[test]
fn search_on_empty_book_is_not_found() {
    let book = ContactBook::new();
    assert_eq!(
        book.get("Bob"),
        Err(CollectionError::KeyNotFound("Bob".to_string()))
    );
    assert_eq!(
        lines(&search_contact(&book, "Bob")),
        vec!["Contact not found."]
    );
}

#[test]
fn todo_session_adds_lists_and_returns() {
    let mut console = ScriptedConsole::new(["1", "Task A", "2", "4"]);
    let mut session = todo::session(&TodoConfig::default());

    let reason = session.run(&mut console).expect("run");

    assert_eq!(reason, Termination::ExitChoice);
    assert_eq!(
        session.status(),
        SessionState::Terminated(Termination::ExitChoice)
    );
    assert!(console.printed("Task added!"));
    let listed = console.position_of("Your tasks:").expect("listing");
    assert_eq!(console.output()[listed + 1], "1. Task A");
    assert_eq!(console.remaining(), 0);
}

#[test]
fn todo_session_survives_bad_input() {
    let mut console = ScriptedConsole::new([
        "x", // unknown choice
        "3", // remove on empty list
        "1", "Buy milk", //
        "3", "abc", // not a number
        "3", "9", // out of range
        "2", "4",
    ]);
    let mut session = todo::session(&TodoConfig::default());
    assert_eq!(session.run(&mut console).expect("run"), Termination::ExitChoice);

    for expected in [
        "Invalid choice. Please try again.",
        "No tasks to remove.",
        "Invalid input. Please enter a number.",
        "Invalid task number.",
        "1. Buy milk",
    ] {
        assert!(console.printed(expected), "missing line {expected:?}");
    }
    assert_eq!(session.state().len(), 1);
}

#[test]
fn contact_session_ends_on_end_of_input() {
    let mut console = ScriptedConsole::new(["1", "Ana", "555-1", "2"]);
    let mut session = contacts::session(&ContactsConfig::default());
    assert_eq!(session.run(&mut console).expect("run"), Termination::EndOfInput);
    assert!(console.printed("Ana: 555-1"));
    assert_eq!(session.state().get("Ana"), Ok("555-1"));
}
