//! RFC 2849 LDIF rules: cross-grammar reuse, assembled pattern text, and the
//! error-recovery match behavior of the standalone rules. The LDIF rules use
//! lookaround, so fancy-regex drives them; the rules that additionally need
//! PCRE duplicate-name mode (`VALUE_URL` and everything containing it) are
//! asserted on pattern text only.

mod common;

use common::match_with_fancy;
use rfcre::rfc::{RFC2253, RFC2849, RFC3986, RFC5234};
use rfcre::RuleSet;

#[test]
fn character_classes_assemble_as_published() {
    assert_eq!(
        RFC2849.pattern("ALPHA").unwrap(),
        RFC5234.pattern("ALPHA").unwrap()
    );
    assert_eq!(
        RFC2849.pattern("SPACE").unwrap(),
        RFC5234.pattern("SP").unwrap()
    );
    assert_eq!(RFC2849.pattern("ATTR_TYPE_CHARS").unwrap(), "[0-9A-Za-z-]");
    assert_eq!(RFC2849.pattern("BASE64_CHAR").unwrap(), r"[\+\/0-9=A-Za-z]");
    assert_eq!(
        RFC2849.pattern("SAFE_INIT_CHAR").unwrap(),
        r"[\x01-\x09\x0B-\x0C\x0E-\x1F\x21-\x39\x3B\x3D-\x7F]"
    );
    assert_eq!(
        RFC2849.pattern("SAFE_CHAR").unwrap(),
        r"[\x01-\x09\x0B-\x0C\x0E-\x7F]"
    );
    assert_eq!(RFC2849.pattern("SEP").unwrap(), r"(?:\r\n|\n)");
    assert_eq!(RFC2849.pattern("EOL").unwrap(), r"(?:(?:\r\n|\n)|$)");
    assert_eq!(RFC2849.pattern("NOTEOL").unwrap(), r"(?:[^\r\n]|\r(?!\n))");
}

#[test]
fn reused_productions_are_taken_from_their_home_grammars() {
    assert_eq!(
        RFC2849.pattern("LDAP_OID").unwrap(),
        RFC2253.pattern("OID").unwrap()
    );
    assert_eq!(
        RFC2849.pattern("URL").unwrap(),
        RFC3986.pattern("URI_REFERENCE").unwrap()
    );
}

#[test]
fn productions_compose_from_their_parts() {
    let space = RFC2849.pattern("SPACE").unwrap();
    assert_eq!(RFC2849.pattern("FILL").unwrap(), format!("(?:{space}*)"));

    let digit = RFC2849.pattern("DIGIT").unwrap();
    assert_eq!(
        RFC2849.pattern("VERSION_NUMBER").unwrap(),
        format!("(?:{digit}+)")
    );

    let safe_init_char = RFC2849.pattern("SAFE_INIT_CHAR").unwrap();
    let safe_char = RFC2849.pattern("SAFE_CHAR").unwrap();
    assert_eq!(
        RFC2849.pattern("SAFE_STRING").unwrap(),
        format!("(?:(?:{safe_init_char}{safe_char}*)?)")
    );

    let ldap_oid = RFC2849.pattern("LDAP_OID").unwrap();
    let alpha = RFC2849.pattern("ALPHA").unwrap();
    let attr_type_chars = RFC2849.pattern("ATTR_TYPE_CHARS").unwrap();
    assert_eq!(
        RFC2849.pattern("ATTRIBUTE_TYPE").unwrap(),
        format!("(?:{ldap_oid}|(?:{alpha}{attr_type_chars}*))")
    );

    let attribute_description = RFC2849.pattern("ATTRIBUTE_DESCRIPTION").unwrap();
    let value_spec = RFC2849.pattern("VALUE_SPEC").unwrap();
    let eol = RFC2849.pattern("EOL").unwrap();
    assert_eq!(
        RFC2849.pattern("ATTRVAL_SPEC").unwrap(),
        format!("(?:(?<attr_desc>{attribute_description}){value_spec}{eol})")
    );

    let dn_value_spec = RFC2849.pattern("DN_VALUE_SPEC").unwrap();
    assert_eq!(
        RFC2849.pattern("DN_SPEC").unwrap(),
        format!("(?:dn{dn_value_spec})")
    );
    assert_eq!(
        RFC2849.pattern("NEWRDN_SPEC").unwrap(),
        format!("(?:newrdn{dn_value_spec}{eol})")
    );
}

#[test]
fn standalone_rules_declare_their_error_captures() {
    assert_eq!(
        RFC2849.captures("VERSION_SPEC").unwrap(),
        ["version_number", "version_error"]
    );
    assert_eq!(
        RFC2849.error_captures("VERSION_SPEC").unwrap(),
        ["version_error"]
    );
    assert_eq!(
        RFC2849.captures("DN_SPEC").unwrap(),
        ["value_safe", "value_safe_error", "value_b64", "value_b64_error"]
    );
    assert_eq!(
        RFC2849.captures("VALUE_SPEC").unwrap(),
        [
            "value_safe",
            "value_safe_error",
            "value_b64",
            "value_b64_error",
            "value_url",
            "value_url_error"
        ]
    );
    assert_eq!(
        RFC2849.captures("CONTROL").unwrap(),
        [
            "ctl_type",
            "ctl_crit",
            "value_safe",
            "value_safe_error",
            "value_b64",
            "value_b64_error",
            "value_url",
            "value_url_error",
            "ctl_crit_error",
            "ctl_type_error"
        ]
    );
    assert_eq!(
        RFC2849.captures("MOD_SPEC_INIT").unwrap(),
        ["mod_type", "attr_desc", "attr_opts_error", "attr_type_error"]
    );
}

#[test]
fn version_spec_matches_and_recovers() {
    let matches = match_with_fancy(&*RFC2849, "VERSION_SPEC", "version: 1\n").unwrap();
    assert_eq!(matches.named("version_number").unwrap().text, "1");
    assert_eq!(matches.named("version_number").unwrap().offset, 9);
    assert!(matches.named("version_error").is_none());

    // A malformed number degrades to the error capture instead of failing.
    let matches = match_with_fancy(&*RFC2849, "VERSION_SPEC", "version: foo\n").unwrap();
    assert!(matches.named("version_number").is_none());
    assert_eq!(matches.named("version_error").unwrap(), &rfcre::Matched::new("foo", 9));

    // An empty error capture is present, not absent.
    let matches = match_with_fancy(&*RFC2849, "VERSION_SPEC", "version: ").unwrap();
    assert!(matches.named("version_number").is_none());
    assert_eq!(matches.named("version_error").unwrap(), &rfcre::Matched::new("", 9));

    assert!(match_with_fancy(&*RFC2849, "VERSION_SPEC", "noversion: 1\n").is_none());
}

#[test]
fn dn_spec_reports_a_safe_value_at_its_offset() {
    let matches = match_with_fancy(&*RFC2849, "DN_SPEC", "dn: dc=example,dc=org\n").unwrap();
    let value_safe = matches.named("value_safe").unwrap();
    assert_eq!(value_safe.text, "dc=example,dc=org");
    assert_eq!(value_safe.offset, 4);
    assert!(matches.named("value_b64").is_none());
    assert!(matches.named("value_safe_error").is_none());
    assert!(matches.named("value_b64_error").is_none());

    let errors = RFC2849.find_captured_errors("DN_SPEC", &matches).unwrap();
    assert!(errors.is_empty());
    let values = RFC2849.find_captured_values("DN_SPEC", &matches).unwrap();
    assert_eq!(
        values,
        [(
            "value_safe".to_owned(),
            rfcre::Matched::new("dc=example,dc=org", 4)
        )]
    );
}

#[test]
fn dn_spec_base64_and_error_branches() {
    let matches = match_with_fancy(&*RFC2849, "DN_SPEC", "dn:: ZXhhbXBsZQ==\n").unwrap();
    assert_eq!(matches.named("value_b64").unwrap().text, "ZXhhbXBsZQ==");
    assert!(matches.named("value_safe").is_none());

    // A safe-string that runs into forbidden bytes captures the remainder.
    let matches = match_with_fancy(&*RFC2849, "DN_SPEC", "dn: dc=ex\x7Fample\u{0080}rest\n").unwrap();
    assert!(matches.named("value_safe").is_none());
    assert!(matches.named("value_safe_error").is_some());
}

#[test]
fn changerecord_init_classifies_change_types() {
    let matches = match_with_fancy(&*RFC2849, "CHANGERECORD_INIT", "changetype: modrdn\n").unwrap();
    assert_eq!(matches.named("chg_type").unwrap().text, "modrdn");
    assert!(matches.named("chg_type_error").is_none());

    let matches = match_with_fancy(&*RFC2849, "CHANGERECORD_INIT", "changetype: banana\n").unwrap();
    assert!(matches.named("chg_type").is_none());
    assert_eq!(matches.named("chg_type_error").unwrap().text, "banana");
    assert_eq!(
        RFC2849
            .error_message("chg_type_error", Some("CHANGERECORD_INIT"))
            .unwrap(),
        "missing or invalid change type (RFC2849)"
    );
}

#[test]
fn mod_spec_init_recovers_on_bad_options_and_types() {
    let matches = match_with_fancy(&*RFC2849, "MOD_SPEC_INIT", "replace: cn;lang-en\n").unwrap();
    assert_eq!(matches.named("mod_type").unwrap().text, "replace");
    assert_eq!(matches.named("attr_desc").unwrap().text, "cn;lang-en");

    let matches = match_with_fancy(&*RFC2849, "MOD_SPEC_INIT", "add: cn;lang_en\n").unwrap();
    assert!(matches.named("attr_desc").is_none());
    assert_eq!(matches.named("attr_opts_error").unwrap().text, "_en");

    let matches = match_with_fancy(&*RFC2849, "MOD_SPEC_INIT", "delete: #bad\n").unwrap();
    assert!(matches.named("attr_desc").is_none());
    assert_eq!(matches.named("attr_type_error").unwrap().text, "#bad");

    assert!(match_with_fancy(&*RFC2849, "MOD_SPEC_INIT", "modify: cn\n").is_none());
}

#[test]
fn value_safe_rejects_leading_tag_characters() {
    // value-safe must not start with ":" or "<"; those route to the base64
    // and URL branches of value-spec.
    assert!(match_with_fancy(&*RFC2849, "VALUE_SAFE", ": x\n").is_none());
    assert!(match_with_fancy(&*RFC2849, "VALUE_SAFE", "< x\n").is_none());

    let matches = match_with_fancy(&*RFC2849, "VALUE_SAFE", " cn=admin\n").unwrap();
    assert_eq!(matches.named("value_safe").unwrap().text, "cn=admin");
    assert_eq!(matches.named("value_safe").unwrap().offset, 1);
}

#[test]
fn value_base64_matches_and_recovers() {
    let matches = match_with_fancy(&*RFC2849, "VALUE_BASE64", ": QWxhZGRpbg==\n").unwrap();
    assert_eq!(matches.named("value_b64").unwrap().text, "QWxhZGRpbg==");

    let matches = match_with_fancy(&*RFC2849, "VALUE_BASE64", ": QWxh!!\n").unwrap();
    assert!(matches.named("value_b64").is_none());
    assert_eq!(matches.named("value_b64_error").unwrap().text, "!!");
}
