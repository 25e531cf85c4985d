//! Match-result boundary types.
//!
//! This crate never runs its patterns; a host regex engine does. These types
//! describe the shape rule-set queries consume afterwards: an ordered mapping
//! from capture key (position or name) to either an absent marker or a
//! captured substring with its byte offset. Position `0` is the whole match.
//! Absence is distinct from a present empty string.

/// A captured substring and the byte offset it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched {
    pub text: String,
    pub offset: usize,
}

impl Matched {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// Key of one match entry: a group position or a group name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchKey {
    Index(usize),
    Name(String),
}

impl MatchKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// An ordered match-result mapping. `None` is the absent marker for optional
/// groups the engine did not reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    entries: Vec<(MatchKey, Option<Matched>)>,
}

impl Matches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for `key`, replacing an earlier entry with the same key.
    pub fn insert(&mut self, key: MatchKey, value: Option<Matched>) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &MatchKey) -> Option<&Option<Matched>> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The captured text for a named group, if the group matched.
    pub fn named(&self, name: &str) -> Option<&Matched> {
        match self.get(&MatchKey::name(name)) {
            Some(Some(matched)) => Some(matched),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(MatchKey, Option<Matched>)> {
        self.entries.iter()
    }

    /// Entries that actually captured something, in match order.
    pub fn present(&self) -> impl Iterator<Item = (&MatchKey, &Matched)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|matched| (key, matched)))
    }

    /// Adapts a [`regex`] match to this shape. Every group appears under its
    /// position; named groups additionally appear under their name, so the
    /// result mirrors what a PCRE host hands back.
    pub fn from_regex(re: &regex::Regex, caps: &regex::Captures<'_>) -> Self {
        let mut matches = Self::new();
        for (index, name) in re.capture_names().enumerate() {
            let value = caps
                .get(index)
                .map(|m| Matched::new(m.as_str(), m.start()));
            matches.insert(MatchKey::Index(index), value.clone());
            if let Some(name) = name {
                matches.insert(MatchKey::name(name), value);
            }
        }
        matches
    }
}

impl FromIterator<(MatchKey, Option<Matched>)> for Matches {
    fn from_iter<I: IntoIterator<Item = (MatchKey, Option<Matched>)>>(iter: I) -> Self {
        let mut matches = Self::new();
        for (key, value) in iter {
            matches.insert(key, value);
        }
        matches
    }
}
