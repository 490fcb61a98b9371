//! Form shortcut labels for help text
//!
//! Every shortcut is matched on Ctrl. Terminals only report Cmd with keyboard
//! enhancement flags, which are not enabled.

pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Show or hide password characters
pub const MASK_SHORTCUT: &str = "Ctrl+T";
