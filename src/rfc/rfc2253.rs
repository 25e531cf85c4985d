//! Syntax rules from [RFC 2253](https://tools.ietf.org/html/rfc2253)
//! (distinguished names) as PCRE fragments.

use once_cell::sync::Lazy;

use crate::ruleset::Grammar;

pub static RFC2253: Lazy<Grammar> = Lazy::new(build);

fn build() -> Grammar {
    // Character lists for character classes.
    let alphachars = "A-Za-z";
    let digitchars = "0-9";
    let hexdigchars = "0-9A-Fa-f";
    let specialchars = ",=+<>#;";
    let keycharchars = format!("{digitchars}{alphachars}-");

    // Character classes, section 3.
    let alpha = format!("[{alphachars}]");
    let digit = format!("[{digitchars}]");
    // hexchar = DIGIT / "A" / ... / "F" / "a" / ... / "f"
    let hexchar = format!("[{hexdigchars}]");
    // special = "," / "=" / "+" / "<" / ">" / "#" / ";"
    let special = format!("[{specialchars}]");
    // keychar = ALPHA / DIGIT / "-"
    let keychar = format!("[{keycharchars}]");
    // stringchar = <any character except one of special, "\" or QUOTATION >
    let stringchar = format!(r#"[^{specialchars}\\"]"#);
    // quotechar = <any character except "\" or QUOTATION >
    let quotechar = r#"[^\\"]"#;

    // hexpair = hexchar hexchar
    let hexpair = format!("(?:{hexchar}{hexchar})");

    // string_hex = 1*hexpair
    let hexstring = format!("(?:{hexpair}+)");

    // pair = "\" ( special / "\" / QUOTATION / hexpair )
    let pair = format!(r#"(?:\\(?:[{specialchars}\\"]|{hexpair}))"#);

    // oid = 1*DIGIT *("." 1*DIGIT)
    let oid = format!(r"(?:{digit}+(?:\.{digit}+)*)");

    // string = *( stringchar / pair ) / "#" string_hex
    //        / QUOTATION *( quotechar / pair ) QUOTATION
    let string = format!(
        r#"(?:(?:{stringchar}|{pair})*|(?:#{hexstring})|(?:"(?:{quotechar}|{pair})*"))"#
    );

    // attributeValue = string
    let attribute_value = string.clone();

    // attributeType = (ALPHA 1*keychar) / oid
    //
    // RFC2253 has bug here (1* instead of just *), so strict RFC2253
    // does not allow one-letter attribute types such as 'O'.
    let attribute_type = format!("(?:(?:{alpha}{keychar}*)|{oid})");

    // attributeTypeAndValue = attributeType "=" attributeValue
    let attribute_type_and_value = format!("(?:{attribute_type}={attribute_value})");

    // name-component = attributeTypeAndValue *("+" attributeTypeAndValue)
    let name_component =
        format!(r"(?:{attribute_type_and_value}(?:\+{attribute_type_and_value})*)");

    // name = name-component *("," name-component)
    let name = format!("(?:{name_component}(?:,{name_component})*)");

    // distinguishedName = [name] ; may be empty string
    let distinguished_name = format!("(?<dn>{name}?)");

    Grammar::builder("RFC2253")
        .rule("ALPHACHARS", alphachars)
        .rule("DIGITCHARS", digitchars)
        .rule("HEXDIGCHARS", hexdigchars)
        .rule("SPECIALCHARS", specialchars)
        .rule("KEYCHARCHARS", keycharchars)
        .rule("ALPHA", alpha)
        .rule("DIGIT", digit)
        .rule("HEXCHAR", hexchar)
        .rule("SPECIAL", special)
        .rule("KEYCHAR", keychar)
        .rule("STRINGCHAR", stringchar)
        .rule("QUOTECHAR", quotechar)
        .rule("HEXPAIR", hexpair)
        .rule("HEXSTRING", hexstring)
        .rule("PAIR", pair)
        .rule("OID", oid)
        .rule("STRING", string)
        .rule("ATTRIBUTE_VALUE", attribute_value)
        .rule("ATTRIBUTE_TYPE", attribute_type)
        .rule("ATTRIBUTE_TYPE_AND_VALUE", attribute_type_and_value)
        .rule("NAME_COMPONENT", name_component)
        .rule("NAME", name)
        .rule("DISTINGUISHED_NAME", distinguished_name)
        .build()
}
