//! The rule-set capability and its concrete carrier.
//!
//! A rule set is an ordered table of named pattern fragments plus an error
//! registry. The [`RuleSet`] trait is the query surface; [`Grammar`] is the
//! single concrete carrier, assembled once per set by a [`GrammarBuilder`].
//! A set that builds on another holds the parent's assembled fragments by
//! reference rather than re-assembling them.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::captures::{is_error_capture, scan_captures, CaptureCache};
use crate::diagnostics::RuleError;
use crate::matching::{MatchKey, Matched, Matches};
use crate::registry::ErrorRegistry;

/// Query surface shared by every rule set.
pub trait RuleSet: Send + Sync {
    /// Identity used in rule handles and diagnostics, e.g. `"RFC3986"`.
    fn name(&self) -> &str;

    /// Names of the rules this set exposes, its own first, then inherited
    /// ones, without duplicates.
    fn rule_names(&self) -> Vec<&str>;

    /// The assembled pattern text for `rule_name`.
    fn pattern(&self, rule_name: &str) -> Result<&str, RuleError>;

    /// Named capture groups declared by the rule's pattern, in order of first
    /// occurrence. The capture map for the whole set is computed and cached on
    /// the first call for any rule.
    fn captures(&self, rule_name: &str) -> Result<Vec<String>, RuleError>;

    /// Drops the memoized capture map; the next query recomputes it.
    fn invalidate_capture_cache(&self);

    /// The error-catching subset of [`captures`](RuleSet::captures): names
    /// ending in `error`, case-insensitively.
    fn error_captures(&self, rule_name: &str) -> Result<Vec<String>, RuleError> {
        Ok(self
            .captures(rule_name)?
            .into_iter()
            .filter(|name| is_error_capture(name))
            .collect())
    }

    /// The non-error subset of [`captures`](RuleSet::captures).
    fn value_captures(&self, rule_name: &str) -> Result<Vec<String>, RuleError> {
        Ok(self
            .captures(rule_name)?
            .into_iter()
            .filter(|name| !is_error_capture(name))
            .collect())
    }

    /// Entries of `matches` that captured something and belong to the rule's
    /// error captures, in match order.
    fn find_captured_errors(
        &self,
        rule_name: &str,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        let wanted = self.error_captures(rule_name)?;
        Ok(intersect_named(matches, &wanted))
    }

    /// Entries of `matches` that captured something and belong to the rule's
    /// value captures, in match order.
    fn find_captured_values(
        &self,
        rule_name: &str,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        let wanted = self.value_captures(rule_name)?;
        Ok(intersect_named(matches, &wanted))
    }

    /// The set's error-message registry, already merged with any parent's.
    fn defined_errors(&self) -> &ErrorRegistry;

    /// Resolves the message for `error_key` (the empty key stands for a
    /// whole-rule mismatch). Per-rule definitions prefer `rule_name`'s entry
    /// and fall back to their default; single messages ignore `rule_name`.
    fn error_message(&self, error_key: &str, rule_name: Option<&str>) -> Result<&str, RuleError> {
        self.defined_errors()
            .message(error_key, rule_name)
            .ok_or_else(|| RuleError::MissingErrorKey {
                rule_set: self.name().to_owned(),
                error_key: error_key.to_owned(),
            })
    }
}

fn intersect_named(matches: &Matches, wanted: &[String]) -> Vec<(String, Matched)> {
    matches
        .present()
        .filter_map(|(key, matched)| match key {
            MatchKey::Name(name) if wanted.iter().any(|w| w == name) => {
                Some((name.clone(), matched.clone()))
            }
            _ => None,
        })
        .collect()
}

/// An assembled rule set: the ordered fragment table, the merged error
/// registry, and the lazily filled capture cache.
#[derive(Debug)]
pub struct Grammar {
    name: &'static str,
    rules: Vec<(&'static str, Cow<'static, str>)>,
    errors: ErrorRegistry,
    captures: CaptureCache,
}

impl Grammar {
    pub fn builder(name: &'static str) -> GrammarBuilder {
        GrammarBuilder {
            name,
            rules: Vec::new(),
            errors: ErrorRegistry::new(),
            parent: None,
        }
    }

    /// Infallible fragment lookup for grammars composed from this one.
    /// Panics on an undefined name: that is a defect in the grammar being
    /// assembled, not caller input.
    pub(crate) fn fragment(&self, name: &str) -> &str {
        match self.pattern(name) {
            Ok(pattern) => pattern,
            Err(_) => panic!("{} does not define fragment {name}", self.name),
        }
    }
}

impl RuleSet for Grammar {
    fn name(&self) -> &str {
        self.name
    }

    fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.rules.len());
        for (name, _) in &self.rules {
            if !names.contains(name) {
                names.push(*name);
            }
        }
        names
    }

    fn pattern(&self, rule_name: &str) -> Result<&str, RuleError> {
        self.rules
            .iter()
            .find(|(name, _)| *name == rule_name)
            .map(|(_, pattern)| pattern.as_ref())
            .ok_or_else(|| RuleError::UndefinedRule {
                rule_set: self.name.to_owned(),
                rule_name: rule_name.to_owned(),
            })
    }

    fn captures(&self, rule_name: &str) -> Result<Vec<String>, RuleError> {
        self.captures
            .get_or_compute(rule_name, || {
                self.rules
                    .iter()
                    .map(|(name, pattern)| ((*name).to_owned(), scan_captures(pattern)))
                    .collect::<HashMap<_, _>>()
            })
            .ok_or_else(|| RuleError::UndefinedRule {
                rule_set: self.name.to_owned(),
                rule_name: rule_name.to_owned(),
            })
    }

    fn invalidate_capture_cache(&self) {
        self.captures.invalidate();
    }

    fn defined_errors(&self) -> &ErrorRegistry {
        &self.errors
    }
}

/// Assembles a [`Grammar`]. Fragments are registered in order;
/// [`inherit`](GrammarBuilder::inherit) appends the parent's table after the
/// set's own entries and merges the error registries, the child's definitions
/// winning.
pub struct GrammarBuilder {
    name: &'static str,
    rules: Vec<(&'static str, Cow<'static, str>)>,
    errors: ErrorRegistry,
    parent: Option<&'static Grammar>,
}

impl GrammarBuilder {
    pub fn rule(mut self, name: &'static str, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.rules.push((name, pattern.into()));
        self
    }

    pub fn errors(mut self, errors: ErrorRegistry) -> Self {
        self.errors = errors;
        self
    }

    pub fn inherit(mut self, parent: &'static Grammar) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn build(self) -> Grammar {
        let mut rules = self.rules;
        let mut errors = self.errors;
        if let Some(parent) = self.parent {
            for (name, pattern) in &parent.rules {
                rules.push((*name, Cow::Borrowed(pattern.as_ref())));
            }
            errors = errors.merged_onto(&parent.errors);
        }
        Grammar {
            name: self.name,
            rules,
            errors,
            captures: CaptureCache::new(),
        }
    }
}
