//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with two decimals, e.g. `7.25h`.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}h", h)
}

/// Optional value or `--:--`.
pub fn fmt_optional<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "--:--".to_string())
}

/// Round to two decimals (for JSON/CSV output of derived reals).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
