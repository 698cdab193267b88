/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Percentage color:
/// ≥100 → green
/// 1..100 → yellow
/// 0 → grey
/// <0 → red
pub fn color_for_percentage(value: i64) -> &'static str {
    if value >= 100 {
        GREEN
    } else if value > 0 {
        YELLOW
    } else if value == 0 {
        GREY
    } else {
        RED
    }
}

pub fn colorize_percentage(value: i64) -> String {
    format!("{}{}%{}", color_for_percentage(value), value, RESET)
}

/// Grey out empty placeholders ("--:--", "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
