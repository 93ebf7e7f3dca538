//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Numbers as typed: `38` rather than `38.0`, `7.5` stays `7.5`.
pub fn fmt_number(v: f64) -> String {
    format!("{}", v)
}

/// Cut to `max` characters, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    let one_line = s.replace(['\r', '\n'], " ");
    if one_line.chars().count() <= max {
        return one_line;
    }
    let mut out: String = one_line.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// `[██████░░░░░░░░]  42%`, green once the target is reached.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let pct = usize::from(percent.min(100));
    let filled = pct * width / 100;
    let colour = if pct >= 100 { GREEN } else { YELLOW };

    format!(
        "[{}{}{}{}{}] {:>3}%",
        colour,
        "█".repeat(filled),
        GREY,
        "░".repeat(width - filled),
        RESET,
        pct
    )
}
