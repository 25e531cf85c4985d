//! Human-readable error messages keyed by capture name and rule name.
//!
//! A registry maps an error key (a capture-group name, or the empty string
//! standing for "the rule as a whole did not match") to a definition: either
//! one message used for every rule, or a per-rule table with an optional
//! fallback default. Rule sets that build on another set merge their own
//! registry onto the parent's; see [`ErrorRegistry::merged_onto`].

use std::collections::BTreeMap;

/// One error definition: a single message, or a table of messages per rule
/// name with an optional fallback used when no rule-specific entry exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDefinition {
    Message(String),
    PerRule {
        default: Option<String>,
        rules: BTreeMap<String, String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRegistry {
    defs: BTreeMap<String, ErrorDefinition>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, error_key: &str) -> Option<&ErrorDefinition> {
        self.defs.get(error_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorDefinition)> {
        self.defs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Registers a single message for `error_key`, used regardless of rule.
    pub fn with_message(mut self, error_key: &str, message: &str) -> Self {
        self.defs
            .insert(error_key.to_owned(), ErrorDefinition::Message(message.to_owned()));
        self
    }

    /// Registers per-rule messages for `error_key`. `default` is the fallback
    /// used when a queried rule has no entry of its own.
    pub fn with_rule_messages<'a>(
        mut self,
        error_key: &str,
        default: Option<&str>,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let rules = entries
            .into_iter()
            .map(|(rule, message)| (rule.to_owned(), message.to_owned()))
            .collect();
        self.defs.insert(
            error_key.to_owned(),
            ErrorDefinition::PerRule {
                default: default.map(str::to_owned),
                rules,
            },
        );
        self
    }

    /// Resolves the message for `error_key`. A [`ErrorDefinition::Message`]
    /// ignores `rule_name`; a per-rule table prefers the rule's own entry and
    /// falls back to its default. `None` if the key is unregistered or the
    /// table has neither a matching rule nor a default.
    pub fn message(&self, error_key: &str, rule_name: Option<&str>) -> Option<&str> {
        match self.defs.get(error_key)? {
            ErrorDefinition::Message(message) => Some(message),
            ErrorDefinition::PerRule { default, rules } => rule_name
                .and_then(|rule| rules.get(rule))
                .or(default.as_ref())
                .map(String::as_str),
        }
    }

    /// Merges this registry (the child) onto `parent`, key-wise:
    ///
    /// - a key present on one side only is taken as-is;
    /// - two single messages: the child's wins;
    /// - two per-rule tables: rule entries are unioned with the child winning
    ///   per rule name, and the default is the child's if set, else the
    ///   parent's;
    /// - a single message meeting a per-rule table (either way around) slides
    ///   into the table's default slot, the child side winning a default
    ///   conflict.
    ///
    /// The last point mirrors how the original catalogs combined a scalar
    /// default with a later per-rule override table.
    pub fn merged_onto(self, parent: &ErrorRegistry) -> ErrorRegistry {
        let mut merged = parent.clone();
        for (key, child) in self.defs {
            let combined = match merged.defs.remove(&key) {
                None => child,
                Some(parent_def) => merge_definitions(parent_def, child),
            };
            merged.defs.insert(key, combined);
        }
        merged
    }
}

fn merge_definitions(parent: ErrorDefinition, child: ErrorDefinition) -> ErrorDefinition {
    use ErrorDefinition::{Message, PerRule};
    match (parent, child) {
        (Message(_), Message(child)) => Message(child),
        (
            PerRule {
                default: parent_default,
                rules: mut merged_rules,
            },
            PerRule { default, rules },
        ) => {
            merged_rules.extend(rules);
            PerRule {
                default: default.or(parent_default),
                rules: merged_rules,
            }
        }
        (Message(parent), PerRule { default, rules }) => PerRule {
            default: default.or(Some(parent)),
            rules,
        },
        (PerRule { rules, .. }, Message(child)) => PerRule {
            default: Some(child),
            rules,
        },
    }
}
