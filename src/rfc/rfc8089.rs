//! Syntax rules from [RFC 8089](https://tools.ietf.org/html/rfc8089) (the
//! `file` URI scheme) as PCRE fragments. Builds on the RFC 3986 rule set:
//! every URI production stays available under its own name.

use once_cell::sync::Lazy;

use super::rfc3986::RFC3986;
use crate::ruleset::Grammar;

pub static RFC8089: Lazy<Grammar> = Lazy::new(build);

fn build() -> Grammar {
    let host = RFC3986.fragment("HOST");
    let path_absolute = RFC3986.fragment("PATH_ABSOLUTE");

    // file-auth = "localhost" / host
    let file_auth = format!("(?<file_auth>(?:(?:localhost)|{host}))");

    // local-path = path-absolute
    let local_path = format!("(?<local_path>{path_absolute})");

    // auth-path = [ file-auth ] path-absolute
    let auth_path = format!("(?<auth_path>{file_auth}?{path_absolute})");

    // file-hier-part = ( "//" auth-path ) / local-path
    //
    // Both branches declare path_absolute, hence the duplicate-names flag.
    let file_hier_part =
        format!(r"(?J)(?<file_hier_part>(?:(?:\/\/{auth_path})|{local_path}))");

    // file-scheme = "file"
    let file_scheme = "(?<file_scheme>file)";

    // file-URI = file-scheme ":" file-hier-part
    let file_uri = format!("(?<file_uri>{file_scheme}:{file_hier_part})");

    Grammar::builder("RFC8089")
        .rule("FILE_AUTH", file_auth)
        .rule("LOCAL_PATH", local_path)
        .rule("AUTH_PATH", auth_path)
        .rule("FILE_HIER_PART", file_hier_part)
        .rule("FILE_SCHEME", file_scheme)
        .rule("FILE_URI", file_uri)
        .inherit(&RFC3986)
        .build()
}
