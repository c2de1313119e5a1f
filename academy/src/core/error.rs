//! Recoverable errors raised by collection stores and input parsing.
//!
//! Handlers turn each of these into a message; none of them ends a session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Text was supplied where a number was expected.
    #[error("expected a number, got {input:?}")]
    InputFormat { input: String },

    /// 1-based list position outside `1..=len`.
    #[error("position {position} is out of range for {len} item(s)")]
    IndexOutOfRange { position: i64, len: usize },

    /// Map operation on an absent key.
    #[error("key {0:?} not found")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, CollectionError>;
