//! Named-capture discovery and the per-rule-set capture cache.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the opening of a named capture group in either PCRE spelling,
/// `(?<name>` or `(?P<name>`. Lookbehind assertions cannot collide with this:
/// a group name must start with a letter or underscore.
static NAMED_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\?P?<([[:alpha:]_]\w*)>").expect("named-group scanner is valid"));

/// True if `name` denotes an error-catching capture group. The convention is
/// a case-insensitive `error` suffix on the group name.
pub fn is_error_capture(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with("error")
}

/// Scans pattern text for named capture groups, in order of first occurrence.
///
/// This is a textual scan, not a regex parse: alternation and nesting are not
/// interpreted, positional and non-capturing groups are skipped, and duplicate
/// names fold into a single entry.
pub fn scan_captures(pattern: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in NAMED_GROUP.captures_iter(pattern) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    names
}

/// Memoized capture map for one rule set: rule name to the ordered capture
/// names of its pattern.
///
/// The map for the whole rule set is computed on first access to any rule's
/// captures and reused until [`invalidate`](CaptureCache::invalidate). The
/// pattern table it is computed from is immutable, so recomputation always
/// reproduces the same map; the lock only keeps concurrent first accesses
/// from doing redundant work.
#[derive(Debug, Default)]
pub struct CaptureCache {
    map: RwLock<Option<HashMap<String, Vec<String>>>>,
}

impl CaptureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captures for `rule_name`, running `compute` to fill the
    /// whole map first if nothing is cached. `None` means the rule is unknown
    /// to the computed map.
    pub fn get_or_compute(
        &self,
        rule_name: &str,
        compute: impl FnOnce() -> HashMap<String, Vec<String>>,
    ) -> Option<Vec<String>> {
        {
            let cached = self.map.read().expect("capture cache lock poisoned");
            if let Some(map) = cached.as_ref() {
                return map.get(rule_name).cloned();
            }
        }
        let mut cached = self.map.write().expect("capture cache lock poisoned");
        cached.get_or_insert_with(compute).get(rule_name).cloned()
    }

    /// Drops the memoized map; the next access recomputes it.
    pub fn invalidate(&self) {
        *self.map.write().expect("capture cache lock poisoned") = None;
    }
}
