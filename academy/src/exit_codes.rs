//! Stable exit codes for the academy CLI.

/// Session ended through its exit choice or because input ran out.
pub const OK: i32 = 0;
/// Invalid config, or stdin/stdout failed.
pub const INVALID: i32 = 1;
