//! Process exit codes used by the command-line tool.

/// Everything checked, nothing to report
pub const SUCCESS: i32 = 0;

/// At least one issue was found
pub const VIOLATIONS_FOUND: i32 = 1;

/// Bad arguments, unreadable files, invalid configuration
pub const TOOL_ERROR: i32 = 2;

/// Terminate the process with one of the codes above
pub mod exit {
    use super::{TOOL_ERROR, VIOLATIONS_FOUND};

    pub fn violations_found() -> ! {
        std::process::exit(VIOLATIONS_FOUND)
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR)
    }
}
