//! Top-level menu: pick an example, run it, come back.

use crate::apps::{Academy, Example};
use crate::core::types::Reply;
use crate::io::console::Console;
use crate::session::{Menu, Session};

pub const GOODBYE: &str = "Exiting academy examples. Goodbye!";

pub fn menu() -> Menu<Academy> {
    Example::ALL
        .iter()
        .fold(
            Menu::new("=== Academy Project Examples ===")
                .prompt("Select an example to run (1-7): ")
                .invalid_choice("Invalid choice. Please select a valid option.")
                .farewell(GOODBYE),
            |menu, &example| {
                menu.action(
                    example.title(),
                    move |academy: &mut Academy, console: &mut dyn Console| {
                        example.run(academy, console)?;
                        Ok(Reply::default())
                    },
                )
            },
        )
        .exit("Exit")
}

pub fn session(academy: Academy) -> Session<Academy> {
    Session::new(menu(), academy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::AcademyConfig;
    use crate::session::Termination;
    use crate::test_support::{ScriptedConsole, SequenceRandom};

    fn academy() -> Academy {
        Academy::new(
            AcademyConfig::default(),
            Box::new(SequenceRandom::new(vec![42])),
        )
    }

    #[test]
    fn menu_lists_six_examples_and_exit() {
        let menu = menu();
        let labels: Vec<&str> = menu.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[3], "Chapter 4: To-Do List CLI App");
        assert_eq!(labels[6], "Exit");
    }

    #[test]
    fn returns_to_menu_after_example() {
        let mut console = ScriptedConsole::new(["1", "Ada", "8", "7"]);
        let mut session = session(academy());
        assert_eq!(session.run(&mut console).expect("run"), Termination::ExitChoice);
        assert!(console.printed("--- Chapter 1: Hello, World and Basic I/O ---"));
        assert!(console.printed("Hello, Ada!"));
        assert!(console.printed("Invalid choice. Please select a valid option."));
        assert_eq!(console.output().last().map(String::as_str), Some(GOODBYE));
    }

    #[test]
    fn end_of_input_inside_nested_session_ends_launcher() {
        let mut console = ScriptedConsole::new(["4", "1", "Task A"]);
        let mut session = session(academy());
        assert_eq!(session.run(&mut console).expect("run"), Termination::EndOfInput);
        assert!(!console.printed(GOODBYE));
    }

    #[test]
    fn nested_sessions_start_fresh_each_time() {
        let mut console = ScriptedConsole::new(["4", "1", "Task A", "4", "4", "2", "4", "7"]);
        let mut session = session(academy());
        session.run(&mut console).expect("run");
        assert!(console.printed("No tasks available."));
    }
}
