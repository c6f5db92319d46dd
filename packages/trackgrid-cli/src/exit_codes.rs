//! Process exit codes shared by all subcommands.

/// Everything requested was done.
pub const SUCCESS: i32 = 0;
/// Bad arguments or unreadable input.
pub const INPUT_ERROR: i32 = 1;
/// Work was attempted but nothing succeeded.
pub const EXECUTION_ERROR: i32 = 2;
/// Host platform has no data share mount and no override was given.
pub const UNSUPPORTED_PLATFORM: i32 = 3;
/// Some exports succeeded, others failed.
pub const PARTIAL_FAILURE: i32 = 4;
