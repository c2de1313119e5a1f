//! Menu-driven console examples built on a reusable interactive session loop.
//!
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (collection stores, operation
//!   handlers, game rules). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting capabilities (console, randomness, config),
//!   behind traits so tests can script them.
//!
//! [`session`] drives a menu loop over one exclusively owned collection, and
//! [`apps`] assembles the individual examples and the launcher from it.

pub mod apps;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
