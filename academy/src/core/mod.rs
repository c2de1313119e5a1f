//! Deterministic, pure logic shared by the academy sessions.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! collections and return replies (lines of text) that the session layer
//! writes out.

pub mod calculator;
pub mod contact_book;
pub mod contacts;
pub mod error;
pub mod guess;
pub mod parse;
pub mod rps;
pub mod task_list;
pub mod todo;
pub mod types;
