//! The built-in RFC grammar rule sets.
//!
//! Each submodule assembles one RFC's productions into a [`Grammar`] behind a
//! `Lazy` static. Assembly is pure string composition over the module's own
//! fragments; where one grammar reuses another's production it reads the
//! already-assembled fragment instead of copying its text.

pub mod rfc2253;
pub mod rfc2849;
pub mod rfc3986;
pub mod rfc5234;
pub mod rfc8089;

pub use rfc2253::RFC2253;
pub use rfc2849::RFC2849;
pub use rfc3986::RFC3986;
pub use rfc5234::RFC5234;
pub use rfc8089::RFC8089;

use crate::ruleset::RuleSet;

/// Resolves a rule-set name to the built-in set it identifies.
pub fn lookup(name: &str) -> Option<&'static dyn RuleSet> {
    match name {
        "RFC5234" => Some(&*RFC5234),
        "RFC3986" => Some(&*RFC3986),
        "RFC2253" => Some(&*RFC2253),
        "RFC2849" => Some(&*RFC2849),
        "RFC8089" => Some(&*RFC8089),
        _ => None,
    }
}
