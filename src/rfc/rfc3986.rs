//! Syntax rules from [RFC 3986](https://tools.ietf.org/html/rfc3986) (URI) as
//! PCRE fragments.
//!
//! The top-level rules (`URI`, `URI_REFERENCE`, ...) are meant to be anchored
//! by the caller, e.g. `^...$`. `URI_REFERENCE` switches on duplicate group
//! names (`(?J)`) because its two branches declare the same captures.

use once_cell::sync::Lazy;

use super::rfc5234::{self, RFC5234};
use crate::ruleset::Grammar;

const GEN_DELIM_CHARS: &str = r":\/\?#\[\]@";
const SUB_DELIM_CHARS: &str = r"!\$&'\(\)\*\+,;=";

pub static RFC3986: Lazy<Grammar> = Lazy::new(build);

fn build() -> Grammar {
    // Character lists for character classes.
    let alphachars = rfc5234::ALPHACHARS;
    let digitchars = rfc5234::DIGITCHARS;
    let hexdigchars = format!("{}a-f", rfc5234::HEXDIGCHARS);
    let reservedchars = format!("{GEN_DELIM_CHARS}{SUB_DELIM_CHARS}");
    let unreservedchars = format!(r"{alphachars}{digitchars}\._~-");
    let pcharchars = format!(":@{SUB_DELIM_CHARS}{unreservedchars}");

    // Character classes.
    let alpha = RFC5234.fragment("ALPHA");
    let digit = RFC5234.fragment("DIGIT");
    let hexdig = format!("[{hexdigchars}]");
    let sub_delims = format!("[{SUB_DELIM_CHARS}]");
    let gen_delims = format!("[{GEN_DELIM_CHARS}]");
    let reserved = format!("[{reservedchars}]");
    let unreserved = format!("[{unreservedchars}]");

    // pct-encoded = "%" HEXDIG HEXDIG
    let pct_encoded = format!("(?:%{hexdig}{hexdig})");

    // pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
    let pchar = format!("(?:[{pcharchars}]|{pct_encoded})");

    // segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )
    //               ; non-zero-length segment without any colon ":"
    let segment_nz_nc = format!("(?:(?:[@{SUB_DELIM_CHARS}{unreservedchars}]|{pct_encoded})+)");

    // segment-nz = 1*pchar, segment = *pchar
    let segment_nz = format!("(?:{pchar}+)");
    let segment = format!("(?:{pchar}*)");

    // path-empty = 0<pchar>
    let path_empty = "(?<path_empty>)";

    // path-noscheme = segment-nz-nc *( "/" segment )
    let path_noscheme = format!(r"(?<path_noscheme>{segment_nz_nc}(?:\/{segment})*)");

    // path-rootless = segment-nz *( "/" segment )
    let path_rootless = format!(r"(?<path_rootless>{segment_nz}(?:\/{segment})*)");

    // path-absolute = "/" [ segment-nz *( "/" segment ) ]
    let path_absolute = format!(r"(?<path_absolute>\/(?:{segment_nz}(?:\/{segment})*)?)");

    // path-abempty = *( "/" segment )
    let path_abempty = format!(r"(?<path_abempty>(?:\/{segment})*)");

    // reg-name = *( unreserved / pct-encoded / sub-delims )
    let reg_name =
        format!("(?<reg_name>(?:[{SUB_DELIM_CHARS}{unreservedchars}]|{pct_encoded})*)");

    // dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35
    let dec_octet = format!("(?:{digit}|[1-9]{digit}|1{digit}{digit}|2[0-4]{digit}|25[0-5])");

    // Re-used in IPV4ADDRESS and IPV6V4ADDRESS.
    let dec4octets = format!(r"(?:{dec_octet}\.{dec_octet}\.{dec_octet}\.{dec_octet})");

    // IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
    let ipv4address = format!("(?<ipv4address>{dec4octets})");
    let ipv6v4address = format!("(?<ipv6v4address>{dec4octets})");

    // h16 = 1*4HEXDIG
    let h16 = format!("(?:{hexdig}{{1,4}})");

    // ls32 = ( h16 ":" h16 ) / IPv4address
    let ls32 = format!("(?<ls32>(?:{h16}:{h16})|{ipv6v4address})");

    // IPv6address, RFC 3986 section 3.2.2. The nine alternatives each declare
    // the same nested captures, hence the branch-reset group.
    let ipv6address = format!(
        "(?<ipv6address>(?|\
         (?:(?:{h16}:){{6,6}}{ls32})\
         |(?:::(?:{h16}:){{5,5}}{ls32})\
         |(?:(?:{h16})?::(?:{h16}:){{4,4}}{ls32})\
         |(?:(?:(?:{h16}:){{0,1}}{h16})?::(?:{h16}:){{3,3}}{ls32})\
         |(?:(?:(?:{h16}:){{0,2}}{h16})?::(?:{h16}:){{2,2}}{ls32})\
         |(?:(?:(?:{h16}:){{0,3}}{h16})?::(?:{h16}:){{1,1}}{ls32})\
         |(?:(?:(?:{h16}:){{0,4}}{h16})?::{ls32})\
         |(?:(?:(?:{h16}:){{0,5}}{h16})?::{h16})\
         |(?:(?:(?:{h16}:){{0,6}}{h16})?::)\
         ))"
    );

    // IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
    let ipvfuture =
        format!(r"(?<ipvfuture>v{hexdig}+\.[:{SUB_DELIM_CHARS}{unreservedchars}]+)");

    // IP-literal = "[" ( IPv6address / IPvFuture ) "]"
    let ip_literal = format!(r"(?<ip_literal>\[{ipv6address}\]|\[{ipvfuture}\])");

    // port = *DIGIT
    let port = format!("(?<port>{digit}*)");

    // host = IP-literal / IPv4address / reg-name
    let host = format!("(?<host>{ip_literal}|{ipv4address}|{reg_name})");

    // userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
    let userinfo =
        format!("(?<userinfo>(?:[:{SUB_DELIM_CHARS}{unreservedchars}]|{pct_encoded})*)");

    // authority = [ userinfo "@" ] host [ ":" port ]
    let authority = format!("(?<authority>(?:{userinfo}@)?{host}(?::{port})?)");

    // scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    let scheme = format!(r"(?<scheme>{alpha}[{alphachars}{digitchars}\+\.-]*)");

    // relative-part = "//" authority path-abempty / path-absolute
    //               / path-noscheme / path-empty
    let relative_part = format!(
        r"(?<relative_part>(?:\/\/{authority}{path_abempty})|{path_absolute}|{path_noscheme}|{path_empty})"
    );

    // hier-part = "//" authority path-abempty / path-absolute
    //           / path-rootless / path-empty
    let hier_part = format!(
        r"(?<hier_part>(?:\/\/{authority}{path_abempty})|{path_absolute}|{path_rootless}|{path_empty})"
    );

    // fragment = *( pchar / "/" / "?" ), query likewise
    let fragment = format!(r"(?<fragment>(?:{pchar}|\/|\?)*)");
    let query = format!(r"(?<query>(?:{pchar}|\/|\?)*)");

    // relative-ref = relative-part [ "?" query ] [ "#" fragment ]
    let relative_ref =
        format!(r"(?<relative_ref>{relative_part}(?:\?{query})?(?:#{fragment})?)");

    // absolute-URI = scheme ":" hier-part [ "?" query ]
    let absolute_uri = format!(r"(?<absolute_uri>{scheme}:{hier_part}(?:\?{query})?)");

    // URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
    let uri = format!(r"(?<uri>{scheme}:{hier_part}(?:\?{query})?(?:#{fragment})?)");

    // URI-reference = URI / relative-ref
    let uri_reference = format!("(?<uri_reference>(?J){uri}|{relative_ref})");

    Grammar::builder("RFC3986")
        .rule("ALPHACHARS", alphachars)
        .rule("DIGITCHARS", digitchars)
        .rule("HEXDIGCHARS", hexdigchars)
        .rule("GEN_DELIM_CHARS", GEN_DELIM_CHARS)
        .rule("SUB_DELIM_CHARS", SUB_DELIM_CHARS)
        .rule("RESERVEDCHARS", reservedchars)
        .rule("UNRESERVEDCHARS", unreservedchars)
        .rule("PCHARCHARS", pcharchars)
        .rule("ALPHA", alpha)
        .rule("DIGIT", digit)
        .rule("HEXDIG", hexdig)
        .rule("SUB_DELIMS", sub_delims)
        .rule("GEN_DELIMS", gen_delims)
        .rule("RESERVED", reserved)
        .rule("UNRESERVED", unreserved)
        .rule("PCT_ENCODED", pct_encoded)
        .rule("PCHAR", pchar)
        .rule("SEGMENT_NZ_NC", segment_nz_nc)
        .rule("SEGMENT_NZ", segment_nz)
        .rule("SEGMENT", segment)
        .rule("PATH_EMPTY", path_empty)
        .rule("PATH_NOSCHEME", path_noscheme)
        .rule("PATH_ROOTLESS", path_rootless)
        .rule("PATH_ABSOLUTE", path_absolute)
        .rule("PATH_ABEMPTY", path_abempty)
        .rule("REG_NAME", reg_name)
        .rule("DEC_OCTET", dec_octet)
        .rule("DEC4OCTETS", dec4octets)
        .rule("IPV4ADDRESS", ipv4address)
        .rule("IPV6V4ADDRESS", ipv6v4address)
        .rule("H16", h16)
        .rule("LS32", ls32)
        .rule("IPV6ADDRESS", ipv6address)
        .rule("IPVFUTURE", ipvfuture)
        .rule("IP_LITERAL", ip_literal)
        .rule("PORT", port)
        .rule("HOST", host)
        .rule("USERINFO", userinfo)
        .rule("AUTHORITY", authority)
        .rule("SCHEME", scheme)
        .rule("RELATIVE_PART", relative_part)
        .rule("HIER_PART", hier_part)
        .rule("FRAGMENT", fragment)
        .rule("QUERY", query)
        .rule("RELATIVE_REF", relative_ref)
        .rule("ABSOLUTE_URI", absolute_uri)
        .rule("URI", uri)
        .rule("URI_REFERENCE", uri_reference)
        .build()
}
