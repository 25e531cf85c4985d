//! Unified error type for rule-set queries.
//!
//! Every failure in this crate is a local, synchronous precondition violation:
//! nothing is retried or recovered internally. Each variant carries enough
//! context (rule-set identity, rule name) for the caller to build a useful
//! diagnostic without any formatting help from the library.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuleError {
    /// The requested rule name is not defined by the rule set or any set it
    /// builds on.
    #[error("rule set {rule_set} does not define rule '{rule_name}'")]
    #[diagnostic(code(rfcre::undefined_rule))]
    UndefinedRule { rule_set: String, rule_name: String },

    /// A rule handle was requested for a name that resolves to no known rule
    /// set.
    #[error("'{identity}' does not name a known rule set")]
    #[diagnostic(code(rfcre::invalid_rule_set_name))]
    InvalidRuleSetName { identity: String },

    /// An error-message lookup used a key absent from the rule set's registry,
    /// or a per-rule definition with neither a matching rule nor a default.
    #[error("rule set {rule_set} defines no error message for key '{error_key}'")]
    #[diagnostic(code(rfcre::missing_error_key))]
    MissingErrorKey { rule_set: String, error_key: String },

    /// A forwarding query was made on an object with no rule handle attached.
    #[error("operation requires a rule handle, none is set")]
    #[diagnostic(code(rfcre::rule_not_set))]
    RuleNotSet,
}
