//! Constants used throughout the bubbles crate

/// Appended to the simple type name when a selector has no explicit title
pub const SELECTOR_TITLE_SUFFIX: &str = " selector";

/// Prompt shown for the optional file drop target
pub const DROP_PROMPT: &str = "Drop a file (path, empty to skip)";

/// Prompt suffix of the final OK / Cancel decision
pub const CONFIRM_PROMPT_SUFFIX: &str = "(OK / Cancel)";

/// Combo boxes with more choices than this switch to fuzzy search
pub const FUZZY_SELECT_THRESHOLD: usize = 10;

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
