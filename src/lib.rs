//! Regular-expression rule sets for networking RFC grammars.
//!
//! Each rule set assembles the productions of one RFC (core ABNF, URI syntax,
//! distinguished names, LDIF, file URIs) into PCRE pattern text, and exposes
//! per rule the assembled pattern, the named capture groups it declares, the
//! split of those captures into error and value groups, and human-readable
//! error messages. Matching itself is left to the host regex engine.

pub use crate::diagnostics::RuleError;
pub use crate::matching::{MatchKey, Matched, Matches};
pub use crate::registry::{ErrorDefinition, ErrorRegistry};
pub use crate::rule::{DecoratesRule, ExposesRule, Rule};
pub use crate::ruleset::{Grammar, GrammarBuilder, RuleSet};

pub mod captures;
pub mod diagnostics;
pub mod matching;
pub mod registry;
pub mod rfc;
pub mod rule;
pub mod ruleset;
