use super::entry::Entry;
use super::track::Track;
use std::collections::BTreeMap;

/// Everything logged for one calendar date: at most one entry per track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyRecord {
    pub normal: Option<Entry>,
    pub forklift: Option<Entry>,
}

/// Date key ("YYYY-MM-DD") → record, ordered by date.
pub type Records = BTreeMap<String, DailyRecord>;

impl DailyRecord {
    pub fn get(&self, track: Track) -> Option<&Entry> {
        match track {
            Track::Normal => self.normal.as_ref(),
            Track::Forklift => self.forklift.as_ref(),
        }
    }

    /// Store `entry` for `track`, replacing any previous one.
    pub fn set(&mut self, track: Track, entry: Entry) {
        match track {
            Track::Normal => self.normal = Some(entry),
            Track::Forklift => self.forklift = Some(entry),
        }
    }

    pub fn remove(&mut self, track: Track) -> Option<Entry> {
        match track {
            Track::Normal => self.normal.take(),
            Track::Forklift => self.forklift.take(),
        }
    }

    pub fn has(&self, track: Track) -> bool {
        self.get(track).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_none() && self.forklift.is_none()
    }

    /// Populated tracks in fixed order (normal first).
    pub fn entries(&self) -> impl Iterator<Item = (Track, &Entry)> {
        Track::ALL
            .into_iter()
            .filter_map(move |t| self.get(t).map(|e| (t, e)))
    }
}
