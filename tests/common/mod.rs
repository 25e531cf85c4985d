//! Shared fixtures: a three-deep chain of small rule sets exercising
//! inheritance, capture classification, and error-registry merging, plus
//! helpers for driving rules through a real regex engine.
#![allow(dead_code)]

use once_cell::sync::Lazy;
use rfcre::{ErrorRegistry, Grammar, MatchKey, Matched, Matches, RuleSet};

/// Base fixture: one rule, one value capture.
pub static RULE_SET_0: Lazy<Grammar> = Lazy::new(|| {
    Grammar::builder("RuleSet0")
        .rule("VAR_NAME", r"(?<var_name>[[:alpha:]_]\w+)")
        .build()
});

/// Adds integer assignments on top of [`RULE_SET_0`], with a scalar message
/// for `value_int_error` and a per-rule whole-rule message.
pub static RULE_SET_1: Lazy<Grammar> = Lazy::new(|| {
    let var_name = RULE_SET_0.pattern("VAR_NAME").unwrap().to_owned();
    let int = r"(?:(?:[+-]\s*)?[0-9]+)";
    let partial_int = r"(?:(?:[+-]\s*)?[0-9]*)";
    let assignment_int = format!(
        r"(?:{var_name}\s*=\s*(?:(?:(?<value_int>{int})\s*;)|(?:{partial_int}(?<value_int_error>[^;]*))))"
    );
    Grammar::builder("RuleSet1")
        .rule("INT", int)
        .rule("PARTIAL_INT", partial_int)
        .rule("ASSIGNMENT_INT", assignment_int)
        .errors(
            ErrorRegistry::new()
                .with_rule_messages(
                    "",
                    None,
                    [("ASSIGNMENT_INT", "missing \"var_name =\" in integer assignment")],
                )
                .with_message("value_int_error", "malformed integer value"),
        )
        .inherit(&RULE_SET_0)
        .build()
});

/// Adds string assignments on top of [`RULE_SET_1`]. Its registry overrides
/// the inherited scalar `value_int_error` with a per-rule entry, which the
/// merge must keep as the fallback default.
pub static RULE_SET_2: Lazy<Grammar> = Lazy::new(|| {
    let var_name = RULE_SET_0.pattern("VAR_NAME").unwrap().to_owned();
    let string = r#"(?:"(?:[^"]|\")*")"#;
    let partial_string = r#"(?:"(?:[^"]|\")*)"#;
    let assignment_string = format!(
        r#"(?:{var_name}\s*=\s*(?:(?:(?<value_string>{string});)|(?:{partial_string}(?<value_string_error>[^;]*))))"#
    );
    Grammar::builder("RuleSet2")
        .rule("STRING", string)
        .rule("PARTIAL_STRING", partial_string)
        .rule("ASSIGNMENT_STRING", assignment_string)
        .errors(
            ErrorRegistry::new()
                .with_rule_messages(
                    "",
                    None,
                    [("ASSIGNMENT_STRING", "missing \"var_name =\" in string assignment")],
                )
                .with_rule_messages(
                    "value_int_error",
                    None,
                    [("ASSIGNMENT_INT", "malformed integer in assignment")],
                )
                .with_rule_messages(
                    "value_string_error",
                    Some("malformed string"),
                    [("ASSIGNMENT_STRING", "malformed string in assignment")],
                ),
        )
        .inherit(&RULE_SET_1)
        .build()
});

pub fn fixture_sets() -> Vec<&'static dyn RuleSet> {
    vec![&*RULE_SET_0, &*RULE_SET_1, &*RULE_SET_2]
}

/// The capture names each fixture rule is expected to declare.
pub fn expected_captures(rule_name: &str) -> Vec<&'static str> {
    match rule_name {
        "VAR_NAME" => vec!["var_name"],
        "ASSIGNMENT_INT" => vec!["var_name", "value_int", "value_int_error"],
        "ASSIGNMENT_STRING" => vec!["var_name", "value_string", "value_string_error"],
        _ => vec![],
    }
}

/// Runs `rule_name` of `rule_set` against `subject` with the `regex` crate,
/// anchored at the start, and adapts the result. For rules without lookaround.
pub fn match_with_regex(
    rule_set: &dyn RuleSet,
    rule_name: &str,
    subject: &str,
) -> Option<Matches> {
    let pattern = format!("^{}", rule_set.pattern(rule_name).unwrap());
    let re = regex::Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("{rule_name} does not compile under regex: {e}"));
    re.captures(subject)
        .map(|caps| Matches::from_regex(&re, &caps))
}

/// Like [`match_with_regex`], but through fancy-regex for the rules that use
/// lookaround assertions.
pub fn match_with_fancy(
    rule_set: &dyn RuleSet,
    rule_name: &str,
    subject: &str,
) -> Option<Matches> {
    let pattern = format!("^{}", rule_set.pattern(rule_name).unwrap());
    let re = fancy_regex::Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("{rule_name} does not compile under fancy-regex: {e}"));
    let caps = re
        .captures(subject)
        .unwrap_or_else(|e| panic!("{rule_name} failed against {subject:?}: {e}"))?;
    let mut matches = Matches::new();
    for (index, name) in re.capture_names().enumerate() {
        let value = caps
            .get(index)
            .map(|m| Matched::new(m.as_str(), m.start()));
        matches.insert(MatchKey::Index(index), value.clone());
        if let Some(name) = name {
            matches.insert(MatchKey::name(name), value);
        }
    }
    Some(matches)
}

/// Asserts the rule matches the whole subject (anchored both ends).
pub fn assert_full_match_with_regex(rule_set: &dyn RuleSet, rule_name: &str, subject: &str) {
    let pattern = format!("^(?:{})$", rule_set.pattern(rule_name).unwrap());
    let re = regex::Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("{rule_name} does not compile under regex: {e}"));
    assert!(
        re.is_match(subject),
        "{rule_name} should fully match {subject:?}"
    );
}

pub fn assert_no_full_match_with_regex(rule_set: &dyn RuleSet, rule_name: &str, subject: &str) {
    let pattern = format!("^(?:{})$", rule_set.pattern(rule_name).unwrap());
    let re = regex::Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("{rule_name} does not compile under regex: {e}"));
    assert!(
        !re.is_match(subject),
        "{rule_name} should not fully match {subject:?}"
    );
}
