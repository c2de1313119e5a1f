//! Side-effecting capabilities consumed by sessions: console, randomness, config.

pub mod config;
pub mod console;
pub mod random;
