//! Menu-driven interactive session loop.
//!
//! A [`Session`] owns one piece of mutable state (usually a collection) and a
//! [`Menu`] mapping choice codes to actions. Each iteration prints the menu,
//! reads one choice and dispatches it:
//!
//! - unknown code: print the menu's invalid-choice message, keep running;
//! - exit code: print the optional farewell, terminate;
//! - any other code: run the action against the state and print its reply.
//!
//! Reaching end-of-input at any read terminates the session normally.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::types::Reply;
use crate::io::console::{Console, EndOfInput, is_end_of_input};

/// Action body: mutate the state, possibly prompting for arguments, and
/// return the lines to print.
pub type Handler<S> = Box<dyn Fn(&mut S, &mut dyn Console) -> Result<Reply>>;

pub enum Action<S> {
    Run(Handler<S>),
    Exit,
}

pub struct MenuEntry<S> {
    pub code: String,
    pub label: String,
    pub action: Action<S>,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user picked the exit entry.
    ExitChoice,
    /// Input ran out.
    EndOfInput,
}

impl Termination {
    /// Map a nested session's termination onto its parent's action result.
    ///
    /// `ExitChoice` returns control to the parent; `EndOfInput` ends the
    /// parent as well.
    pub fn into_parent(self) -> Result<()> {
        match self {
            Self::ExitChoice => Ok(()),
            Self::EndOfInput => Err(EndOfInput.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated(Termination),
}

/// Ordered dispatch table plus the fixed strings a menu prints.
pub struct Menu<S> {
    title: String,
    prompt: String,
    invalid_choice: String,
    farewell: Option<String>,
    entries: Vec<MenuEntry<S>>,
}

impl<S> Menu<S> {
    /// Empty menu. Entries are numbered `1..` in the order they are added.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: "Enter your choice: ".to_string(),
            invalid_choice: "Invalid choice. Please try again.".to_string(),
            farewell: None,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn invalid_choice(mut self, message: impl Into<String>) -> Self {
        self.invalid_choice = message.into();
        self
    }

    /// Line printed when the exit entry is chosen.
    #[must_use]
    pub fn farewell(mut self, message: impl Into<String>) -> Self {
        self.farewell = Some(message.into());
        self
    }

    #[must_use]
    pub fn action<F>(self, label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut S, &mut dyn Console) -> Result<Reply> + 'static,
    {
        self.entry(label, Action::Run(Box::new(handler)))
    }

    #[must_use]
    pub fn exit(self, label: impl Into<String>) -> Self {
        self.entry(label, Action::Exit)
    }

    fn entry(mut self, label: impl Into<String>, action: Action<S>) -> Self {
        let code = (self.entries.len() + 1).to_string();
        self.entries.push(MenuEntry {
            code,
            label: label.into(),
            action,
        });
        self
    }

    pub fn entries(&self) -> &[MenuEntry<S>] {
        &self.entries
    }

    fn find(&self, code: &str) -> Option<&Action<S>> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| &entry.action)
    }

    fn render(&self, console: &mut dyn Console) -> Result<()> {
        console.write_line("")?;
        console.write_line(&self.title)?;
        for entry in &self.entries {
            console.write_line(&format!("{}. {}", entry.code, entry.label))?;
        }
        Ok(())
    }
}

/// One run of a menu loop over exclusively owned state.
pub struct Session<S> {
    menu: Menu<S>,
    state: S,
    status: SessionState,
}

impl<S> Session<S> {
    pub fn new(menu: Menu<S>, state: S) -> Self {
        Self {
            menu,
            state,
            status: SessionState::Running,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn status(&self) -> SessionState {
        self.status
    }

    /// Loop until the exit entry is chosen or input runs out.
    ///
    /// Returns the termination reason. Only real I/O failures are errors.
    /// Calling `run` on a terminated session returns its reason immediately.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Termination> {
        if let SessionState::Terminated(reason) = self.status {
            return Ok(reason);
        }
        info!(title = %self.menu.title, "session started");
        let reason = self.drive(console)?;
        info!(title = %self.menu.title, ?reason, "session terminated");
        self.status = SessionState::Terminated(reason);
        Ok(reason)
    }

    fn drive(&mut self, console: &mut dyn Console) -> Result<Termination> {
        loop {
            self.menu.render(console)?;
            let choice = match console.read_line(&self.menu.prompt) {
                Ok(line) => line,
                Err(err) if is_end_of_input(&err) => return Ok(Termination::EndOfInput),
                Err(err) => return Err(err),
            };
            let code = choice.trim();
            match self.menu.find(code) {
                None => {
                    debug!(code, "invalid choice");
                    console.write_line(&self.menu.invalid_choice)?;
                }
                Some(Action::Exit) => {
                    debug!(code, "exit chosen");
                    if let Some(farewell) = &self.menu.farewell {
                        console.write_line(farewell)?;
                    }
                    return Ok(Termination::ExitChoice);
                }
                Some(Action::Run(handler)) => {
                    debug!(code, "dispatching");
                    match handler(&mut self.state, console) {
                        Ok(reply) => {
                            for line in reply {
                                console.write_line(&line)?;
                            }
                        }
                        Err(err) if is_end_of_input(&err) => {
                            return Ok(Termination::EndOfInput);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }
    }
}
