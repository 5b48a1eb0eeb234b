//! Exit code constants for the cloudstrap CLI.
//!
//! - 0: Success (or the child's own exit code)
//! - 1: Usage error (bad bindings, template, config or resolver failure)
//! - 127: The program could not be launched
//! - 128+N: The child was killed by signal N

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: expansion, config or resolver failure. The child never ran.
pub const USAGE_ERROR: i32 = 1;

/// The program could not be spawned (missing or not executable).
pub const LAUNCH_FAILURE: i32 = 127;

/// Added to the signal number when the child dies from a signal.
pub const SIGNAL_BASE: i32 = 128;
