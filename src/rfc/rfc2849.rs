//! Syntax rules from [RFC 2849](https://tools.ietf.org/html/rfc2849) (LDIF) as
//! PCRE fragments.
//!
//! The standalone rules (`VERSION_SPEC`, `DN_SPEC`, `VALUE_SPEC`, ...) are
//! written for cursor-anchored matching (PCRE `\G`) and carry error-recovery
//! alternatives: a strict branch capturing the value, then a permissive branch
//! that captures the offending text into a `*_error` group instead of failing
//! outright. The `ldap-oid` production is RFC 2253's `OID`, and `url` is
//! RFC 3986's `URI-reference`, both taken from those rule sets as assembled.

use once_cell::sync::Lazy;

use super::rfc2253::RFC2253;
use super::rfc3986::RFC3986;
use super::rfc5234::{self, RFC5234};
use crate::registry::ErrorRegistry;
use crate::ruleset::Grammar;

pub static RFC2849: Lazy<Grammar> = Lazy::new(build);

fn build() -> Grammar {
    let alphachars = rfc5234::ALPHACHARS;
    let digitchars = rfc5234::DIGITCHARS;

    // Character classes.
    let alpha = RFC5234.fragment("ALPHA");
    let digit = RFC5234.fragment("DIGIT");
    let cr = RFC5234.fragment("CR");
    let lf = RFC5234.fragment("LF");
    let space = RFC5234.fragment("SP");

    // attr-type-chars = ALPHA / DIGIT / "-"
    let attr_type_chars = format!("[{digitchars}{alphachars}-]");

    // BASE64-CHAR = %x2B / %x2F / %x30-39 / %x3D / %x41-5A / %x61-7A
    let base64_char = r"[\+\/0-9=A-Za-z]";

    // opt-char = attr-type-chars
    let opt_char = attr_type_chars.clone();

    // SAFE-CHAR: any value <= 127 decimal except NUL, LF, and CR.
    let safe_char = r"[\x01-\x09\x0B-\x0C\x0E-\x7F]";

    // SAFE-INIT-CHAR: any value <= 127 decimal except NUL, LF, CR, SPACE,
    // colon (":") and less than ("<").
    let safe_init_char = r"[\x01-\x09\x0B-\x0C\x0E-\x1F\x21-\x39\x3B\x3D-\x7F]";

    // SEP = (CR LF / LF)
    let sep = format!("(?:{cr}{lf}|{lf})");

    // SEP or end of string.
    let eol = format!("(?:{sep}|$)");

    // Any character except EOL.
    let noteol = format!("(?:[^{cr}{lf}]|{cr}(?!{lf}))");

    // FILL = *SPACE
    let fill = format!("(?:{space}*)");

    // version-number = 1*DIGIT
    let version_number = format!("(?:{digit}+)");

    // version-spec = "version:" FILL version-number
    let version_spec = format!(
        "(?:version:{fill}\
         (?:(?<version_number>{version_number})\
         |(?:{version_number}?(?<version_error>{noteol}*)))\
         (?={eol}))"
    );

    // BASE64-STRING = [*(BASE64-CHAR)]
    let base64_string = format!("(?:{base64_char}*)");

    // BASE64-UTF8-STRING = BASE64-STRING
    let base64_utf8_string = base64_string.clone();

    // SAFE-STRING = [SAFE-INIT-CHAR *SAFE-CHAR]
    let safe_string = format!("(?:(?:{safe_init_char}{safe_char}*)?)");

    // ldap-oid, as defined in RFC 2251; same production as RFC 2253's oid.
    let ldap_oid = RFC2253.fragment("OID");

    // option = 1*opt-char
    let option = format!("(?:{opt_char}+)");

    // options = option / (option ";" options)
    let options = format!("(?:{option}(?:;{option})*)");

    // AttributeType = ldap-oid / (ALPHA *(attr-type-chars))
    let attribute_type = format!("(?:{ldap_oid}|(?:{alpha}{attr_type_chars}*))");

    // AttributeDescription = AttributeType [";" options]
    let attribute_description = format!("(?:{attribute_type}(?:;{options})?)");

    // distinguishedName = SAFE-STRING
    let distinguished_name = safe_string.clone();

    // base64-distinguishedName = BASE64-UTF8-STRING
    let base64_distinguished_name = base64_utf8_string.clone();

    // rdn = SAFE-STRING
    let rdn = safe_string.clone();

    // base64-rdn = BASE64-UTF8-STRING
    let base64_rdn = base64_utf8_string.clone();

    // value-safe = SAFE-STRING, with an error branch capturing anything after
    // a valid prefix up to EOL.
    let value_safe = format!(
        "(?:(?![:<]){fill}\
         (?:(?<value_safe>{safe_string})\
         |(?:{safe_string}(?<value_safe_error>{noteol}*)))\
         (?={eol}))"
    );

    // value-base64 = BASE64-STRING
    let value_base64 = format!(
        "(?::{fill}\
         (?:(?<value_b64>{base64_string})\
         |(?:{base64_string}(?<value_b64_error>{noteol}*)))\
         (?={eol}))"
    );

    // url = <a URL as defined in RFC 1738>; we use URI-reference from
    // RFC 3986 instead of RFC 1738.
    let url = RFC3986.fragment("URI_REFERENCE");

    // value-url = URL
    let value_url = format!(
        "(?:<{fill}\
         (?:(?J)(?<value_url>{url})\
         |(?:(?:{url})?(?<value_url_error>{noteol}*)))\
         (?={eol}))"
    );

    // dn-value-spec = ":" ( FILL distinguishedName / ":" FILL base64-distinguishedName )
    let dn_value_spec = format!("(?::(?:{value_safe}|{value_base64}))");

    // dn-spec = "dn:" (FILL distinguishedName / ":" FILL base64-distinguishedName)
    let dn_spec = format!("(?:dn{dn_value_spec})");

    // value-spec = ":" (FILL 0*1(SAFE-STRING) / ":" FILL (BASE64-STRING) / "<" FILL url)
    let value_spec = format!("(?::(?:{value_safe}|{value_base64}|{value_url}))");

    // control = "control:" FILL ldap-oid 0*1(1*SPACE ("true" / "false"))
    //           0*1(value-spec) SEP
    let control = format!(
        "(?:control:{fill}(?:(?:\
         (?<ctl_type>{ldap_oid})\
         (?:{space}+(?<ctl_crit>true|false))?\
         (?:{value_spec})?\
         )|(?:\
         (?:{ldap_oid})\
         (?:{space}+)\
         (?<ctl_crit_error>{noteol}*)\
         )|(?:\
         (?:{ldap_oid})?\
         (?<ctl_type_error>{noteol}*)\
         )){eol})"
    );

    // attrval-spec = AttributeDescription value-spec SEP
    let attrval_spec =
        format!("(?:(?<attr_desc>{attribute_description}){value_spec}{eol})");

    // Initial line of mod-spec:
    // mod-spec-init = ("add:" / "delete:" / "replace:") FILL AttributeDescription
    let mod_spec_init = format!(
        "(?:(?<mod_type>add|delete|replace):{fill}\
         (?:(?:(?<attr_desc>{attribute_description}))\
         |(?:{attribute_type}(?:;{options}?)(?<attr_opts_error>{noteol}*))\
         |(?:{attribute_type}?(?<attr_type_error>{noteol}*)))\
         (?:{eol}))"
    );

    // Initial line of changerecord:
    // changerecord-init = "changetype:" FILL ("add" / "delete" / "modrdn" / "moddn" / "modify") SEP
    let changerecord_init = format!(
        "(?:changetype:{fill}\
         (?:(?<chg_type>add|delete|modify|modrdn|moddn)\
         |(?<chg_type_error>{noteol}*))\
         {eol})"
    );

    // newrdn-spec = "newrdn:" ( FILL rdn / ":" FILL base64-rdn ) SEP
    let newrdn_spec = format!("(?:newrdn{dn_value_spec}{eol})");

    // newsuperior-spec = "newsuperior:"
    //                    (FILL distinguishedName / ":" FILL base64-distinguishedName) SEP
    let newsuperior_spec = format!("(?:newsuperior{dn_value_spec}{eol})");

    // Error messages, defined only for the productions expected to be used as
    // standalone rules in a parser.
    let errors = ErrorRegistry::new()
        .with_rule_messages(
            "",
            None,
            [
                ("SEP", "expected line separator (RFC2849)"),
                ("VERSION_SPEC", "expected \"version:\" (RFC2849)"),
                ("DN_SPEC", "expected \"dn:\" (RFC2849)"),
                ("VALUE_SPEC", "expected \":\" (RFC2849)"),
                ("CONTROL", "expected \"control:\" (RFC2849)"),
                ("ATTRVAL_SPEC", "expected <AttributeDescription>\":\" (RFC2849)"),
                (
                    "MOD_SPEC_INIT",
                    "expected one of \"add:\", \"delete:\" or \"replace:\" (RFC2849)",
                ),
                ("CHANGERECORD_INIT", "expected \"changetype:\" (RFC2849)"),
                ("NEWRDN_SPEC", "expected \"newrdn:\" (RFC2849)"),
                ("NEWSUPERIOR_SPEC", "expected \"newsuperior:\" (RFC2849)"),
            ],
        )
        .with_message("attr_opts_error", "missing or invalid options (RFC2849)")
        .with_message("attr_type_error", "missing or invalid AttributeType (RFC2849)")
        .with_message("chg_type_error", "missing or invalid change type (RFC2849)")
        .with_message("ctl_type_error", "missing or invalid OID (RFC2849)")
        .with_message("ctl_crit_error", "expected \"true\" or \"false\" (RFC2849)")
        .with_message("value_b64_error", "malformed BASE64-STRING (RFC2849)")
        .with_message("value_safe_error", "malformed SAFE-STRING (RFC2849)")
        .with_message("value_url_error", "malformed URL (RFC2849/RFC3986)")
        .with_message("version_error", "expected valid version number (RFC2849)");

    Grammar::builder("RFC2849")
        .rule("ALPHACHARS", alphachars)
        .rule("DIGITCHARS", digitchars)
        .rule("ALPHA", alpha)
        .rule("DIGIT", digit)
        .rule("CR", cr)
        .rule("LF", lf)
        .rule("SPACE", space)
        .rule("ATTR_TYPE_CHARS", attr_type_chars)
        .rule("BASE64_CHAR", base64_char)
        .rule("OPT_CHAR", opt_char)
        .rule("SAFE_CHAR", safe_char)
        .rule("SAFE_INIT_CHAR", safe_init_char)
        .rule("SEP", sep)
        .rule("EOL", eol)
        .rule("NOTEOL", noteol)
        .rule("FILL", fill)
        .rule("VERSION_NUMBER", version_number)
        .rule("VERSION_SPEC", version_spec)
        .rule("BASE64_STRING", base64_string)
        .rule("BASE64_UTF8_STRING", base64_utf8_string)
        .rule("SAFE_STRING", safe_string)
        .rule("LDAP_OID", ldap_oid)
        .rule("OPTION", option)
        .rule("OPTIONS", options)
        .rule("ATTRIBUTE_TYPE", attribute_type)
        .rule("ATTRIBUTE_DESCRIPTION", attribute_description)
        .rule("DISTINGUISHED_NAME", distinguished_name)
        .rule("BASE64_DISTINGUISHED_NAME", base64_distinguished_name)
        .rule("RDN", rdn)
        .rule("BASE64_RDN", base64_rdn)
        .rule("VALUE_SAFE", value_safe)
        .rule("VALUE_BASE64", value_base64)
        .rule("VALUE_URL", value_url)
        .rule("DN_VALUE_SPEC", dn_value_spec)
        .rule("DN_SPEC", dn_spec)
        .rule("URL", url)
        .rule("VALUE_SPEC", value_spec)
        .rule("CONTROL", control)
        .rule("ATTRVAL_SPEC", attrval_spec)
        .rule("MOD_SPEC_INIT", mod_spec_init)
        .rule("CHANGERECORD_INIT", changerecord_init)
        .rule("NEWRDN_SPEC", newrdn_spec)
        .rule("NEWSUPERIOR_SPEC", newsuperior_spec)
        .errors(errors)
        .build()
}
