//! Single-rule handles and the forwarding decorator.

use std::fmt;

use crate::diagnostics::RuleError;
use crate::matching::{Matched, Matches};
use crate::rfc;
use crate::ruleset::RuleSet;

/// A single rule in a set of rules: a rule-set identity paired with a rule
/// name.
///
/// Every query delegates to the rule set with the stored name; the handle
/// itself holds no caches and may be created and discarded freely. A handle
/// for a name the set does not define is constructible, like any other
/// dangling reference to a rule; the queries then fail with
/// [`RuleError::UndefinedRule`].
#[derive(Clone)]
pub struct Rule {
    rule_set: &'static dyn RuleSet,
    name: String,
}

impl Rule {
    pub fn new(rule_set: &'static dyn RuleSet, name: impl Into<String>) -> Self {
        Self {
            rule_set,
            name: name.into(),
        }
    }

    /// Builds a handle from a rule-set *name*, resolved against the built-in
    /// RFC rule sets. Fails with [`RuleError::InvalidRuleSetName`] when the
    /// name resolves to nothing.
    pub fn from_set_name(
        rule_set_name: &str,
        rule_name: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let rule_set = rfc::lookup(rule_set_name).ok_or_else(|| RuleError::InvalidRuleSetName {
            identity: rule_set_name.to_owned(),
        })?;
        Ok(Self::new(rule_set, rule_name))
    }

    /// The rule name as it appears in the set of rules.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule set this handle delegates to.
    pub fn rule_set(&self) -> &'static dyn RuleSet {
        self.rule_set
    }

    /// The assembled pattern text. Alias of [`pattern`](Rule::pattern).
    pub fn to_text(&self) -> Result<&'static str, RuleError> {
        self.pattern()
    }

    pub fn pattern(&self) -> Result<&'static str, RuleError> {
        self.rule_set.pattern(&self.name)
    }

    pub fn captures(&self) -> Result<Vec<String>, RuleError> {
        self.rule_set.captures(&self.name)
    }

    pub fn error_captures(&self) -> Result<Vec<String>, RuleError> {
        self.rule_set.error_captures(&self.name)
    }

    pub fn value_captures(&self) -> Result<Vec<String>, RuleError> {
        self.rule_set.value_captures(&self.name)
    }

    pub fn find_captured_errors(
        &self,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        self.rule_set.find_captured_errors(&self.name, matches)
    }

    pub fn find_captured_values(
        &self,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        self.rule_set.find_captured_values(&self.name, matches)
    }

    /// Resolves the error message for `error_key` against this rule. The
    /// empty key stands for a whole-rule mismatch.
    pub fn error_message(&self, error_key: &str) -> Result<&'static str, RuleError> {
        self.rule_set.error_message(error_key, Some(&self.name))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("rule_set", &self.rule_set.name())
            .field("name", &self.name)
            .finish()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            self.rule_set as *const dyn RuleSet as *const (),
            other.rule_set as *const dyn RuleSet as *const (),
        ) && self.name == other.name
    }
}

/// Forwarding query surface for any object that may carry a [`Rule`].
///
/// Implementors provide [`rfc_rule`](ExposesRule::rfc_rule); every other
/// method forwards to the attached handle and fails with
/// [`RuleError::RuleNotSet`] when none is attached.
pub trait ExposesRule {
    /// The rule handle queries forward to, if one is attached.
    fn rfc_rule(&self) -> Option<&Rule>;

    fn required_rule(&self) -> Result<&Rule, RuleError> {
        self.rfc_rule().ok_or(RuleError::RuleNotSet)
    }

    fn pattern(&self) -> Result<&'static str, RuleError> {
        self.required_rule()?.pattern()
    }

    fn captures(&self) -> Result<Vec<String>, RuleError> {
        self.required_rule()?.captures()
    }

    fn error_captures(&self) -> Result<Vec<String>, RuleError> {
        self.required_rule()?.error_captures()
    }

    fn value_captures(&self) -> Result<Vec<String>, RuleError> {
        self.required_rule()?.value_captures()
    }

    fn find_captured_errors(
        &self,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        self.required_rule()?.find_captured_errors(matches)
    }

    fn find_captured_values(
        &self,
        matches: &Matches,
    ) -> Result<Vec<(String, Matched)>, RuleError> {
        self.required_rule()?.find_captured_values(matches)
    }

    fn error_message(&self, error_key: &str) -> Result<&'static str, RuleError> {
        self.required_rule()?.error_message(error_key)
    }
}

/// Adds mutable attachment on top of [`ExposesRule`] for types that store the
/// optional handle themselves.
pub trait DecoratesRule: ExposesRule {
    /// Storage slot for the optional rule handle.
    fn rfc_rule_slot(&mut self) -> &mut Option<Rule>;

    fn set_rfc_rule(&mut self, rule: Option<Rule>) {
        *self.rfc_rule_slot() = rule;
    }
}
