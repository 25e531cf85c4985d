//! Core rules from [RFC 5234](https://tools.ietf.org/html/rfc5234#appendix-B.1)
//! (ABNF) as reusable PCRE fragments. The other grammars build their character
//! classes on these.

use once_cell::sync::Lazy;

use crate::ruleset::Grammar;

// Character lists shared with the grammars layered on the core rules.
pub(crate) const ALPHACHARS: &str = "A-Za-z";
pub(crate) const DIGITCHARS: &str = "0-9";
pub(crate) const HEXDIGCHARS: &str = "0-9A-F";
pub(crate) const WSPCHARS: &str = r" \t";

pub static RFC5234: Lazy<Grammar> = Lazy::new(build);

fn build() -> Grammar {
    // Character lists for character classes.
    let bitchars = "01";
    let charchars = r"\x01-\x7F";
    let crchars = r"\r";
    let ctlchars = r"\x00-\x1F\x7F";
    let htabchars = r"\t";
    let lfchars = r"\n";
    let octetchars = r"\x00-\xFF";
    let spchars = " ";
    let vcharchars = r"\x21-\x7E";

    // Core rules, appendix B.1.
    let alpha = format!("[{ALPHACHARS}]");
    let bit = format!("[{bitchars}]");
    let char_ = format!("[{charchars}]");
    let cr = r"\r";
    let crlf = r"(?:\r\n)";
    let ctl = format!("[{ctlchars}]");
    let digit = format!("[{DIGITCHARS}]");
    let dquote = "\"";
    let hexdig = format!("[{HEXDIGCHARS}]");
    let htab = r"\t";
    let lf = r"\n";
    let lwsp = format!("(?:(?:[{WSPCHARS}]|{crlf}[{WSPCHARS}])*)");
    let octet = format!("[{octetchars}]");
    let sp = " ";
    let vchar = format!("[{vcharchars}]");
    let wsp = format!("[{WSPCHARS}]");

    Grammar::builder("RFC5234")
        .rule("ALPHACHARS", ALPHACHARS)
        .rule("BITCHARS", bitchars)
        .rule("CHARCHARS", charchars)
        .rule("CRCHARS", crchars)
        .rule("CTLCHARS", ctlchars)
        .rule("DIGITCHARS", DIGITCHARS)
        .rule("HEXDIGCHARS", HEXDIGCHARS)
        .rule("HTABCHARS", htabchars)
        .rule("LFCHARS", lfchars)
        .rule("OCTETCHARS", octetchars)
        .rule("SPCHARS", spchars)
        .rule("VCHARCHARS", vcharchars)
        .rule("WSPCHARS", WSPCHARS)
        .rule("ALPHA", alpha)
        .rule("BIT", bit)
        .rule("CHAR", char_)
        .rule("CR", cr)
        .rule("CRLF", crlf)
        .rule("CTL", ctl)
        .rule("DIGIT", digit)
        .rule("DQUOTE", dquote)
        .rule("HEXDIG", hexdig)
        .rule("HTAB", htab)
        .rule("LF", lf)
        .rule("LWSP", lwsp)
        .rule("OCTET", octet)
        .rule("SP", sp)
        .rule("VCHAR", vchar)
        .rule("WSP", wsp)
        .build()
}
