//! One-line coloured notifications shown after each user action.
//!
//! Errors go to stderr, everything else to stdout.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_BLUE: &str = "\x1b[34m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// (colour, icon)
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn line(level: Level, msg: impl Display) -> String {
    let (colour, icon) = level.style();
    format!("{colour}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section title with an underline sized to it.
pub fn header<T: Display>(msg: T) {
    let title = msg.to_string();
    println!();
    println!("{BOLD}{title}{RESET}");
    println!("{FG_BLUE}{}{RESET}", "─".repeat(title.chars().count()));
}
