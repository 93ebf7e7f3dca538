/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the field is empty (None, "" or "-"), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "-" => RESET,
        _ => GREY,
    }
}

/// Day count colour: 0 is grey (nothing counted), anything else green.
pub fn color_for_days_counted(value: u32) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}

/// Checkbox for a todo row.
pub fn colorize_done(done: bool) -> String {
    if done {
        format!("{GREEN}[x]{RESET}")
    } else {
        format!("{GREY}[ ]{RESET}")
    }
}
