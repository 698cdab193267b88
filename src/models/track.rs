use serde::Serialize;

/// One of the two parallel entry categories a date can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Normal,
    Forklift,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Normal, Track::Forklift];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Normal => "normal",
            Track::Forklift => "forklift",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Track::Normal),
            "forklift" => Some(Track::Forklift),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (full name or initial, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "n" | "normal" => Some(Track::Normal),
            "f" | "forklift" => Some(Track::Forklift),
            _ => None,
        }
    }
}
