use crate::compat::{Cow, String};
use percent_encoding::percent_decode;

/// Iterate over the decoded `(key, value)` pairs of a query string
/// (`application/x-www-form-urlencoded`).
///
/// One leading `?` is dropped. Empty pieces between `&` are skipped. A piece
/// without `=` yields an empty value.
pub fn parse_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
}

/// Decode one key or value: `+` becomes a space, then percent sequences are
/// decoded. Malformed sequences are kept as written and invalid UTF-8 is
/// replaced with U+FFFD.
pub fn decode_component(s: &str) -> String {
    let plus_replaced: Cow<'_, [u8]> = if memchr::memchr(b'+', s.as_bytes()).is_some() {
        Cow::Owned(
            s.bytes()
                .map(|b| if b == b'+' { b' ' } else { b })
                .collect(),
        )
    } else {
        Cow::Borrowed(s.as_bytes())
    };

    percent_decode(&plus_replaced).decode_utf8_lossy().into_owned()
}
