//! Splitting a URL into editable parameters and putting it back together.

mod form_urlencoded;

use form_urlencoded::parse_pairs;

use crate::character_sets::{needs_value_escape, value_escape};
use crate::compat::{Cow, String, ToString, Vec};
use crate::helpers::split_query;
use crate::record::{ParameterRecord, ParameterSequence};

/// A URL broken into its base path and its query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Everything before the first `?`.
    pub base_path: String,
    /// Decoded query parameters in source order, all selected and original.
    pub records: ParameterSequence,
}

/// Output of [`compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composition {
    /// The rebuilt URL.
    pub url: String,
    /// Keys of parsed parameters that were left out, in record order.
    pub excluded_original_keys: Vec<String>,
}

impl core::fmt::Display for Composition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.url)
    }
}

/// Parse a URL into its base path and query parameters.
///
/// The base path is everything before the first `?`; the rest is decoded as
/// a form-urlencoded query. A URL without `?` has no parameters. Malformed
/// input is decoded on a best-effort basis and never rejected.
///
/// ```
/// let parsed = qsedit::parse("http://x.com/a?foo=1&bar=2 3");
/// assert_eq!(parsed.base_path, "http://x.com/a");
/// assert_eq!(parsed.records.len(), 2);
/// ```
pub fn parse(url: &str) -> ParsedUrl {
    let (base_path, query) = split_query(url);
    let records: ParameterSequence = query
        .map(|query| {
            parse_pairs(query)
                .map(|(key, value)| ParameterRecord::parsed(key, value))
                .collect()
        })
        .unwrap_or_default();

    log::trace!(
        "parsed {} parameter(s) from query of {:?}",
        records.len(),
        base_path
    );

    ParsedUrl {
        base_path: base_path.to_string(),
        records,
    }
}

/// Escape query delimiters in a parameter value.
///
/// Only `%`, space, `&`, `+`, `=`, `#`, `/` and `?` are replaced. The input is
/// scanned once, so escapes introduced here are never escaped again.
///
/// ```
/// assert_eq!(qsedit::escape("a b"), "a%20b");
/// assert_eq!(qsedit::escape("100%"), "100%25");
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
    if !needs_value_escape(value) {
        return Cow::Borrowed(value);
    }

    let mut buffer = String::with_capacity(value.len() + 8);
    escape_into(&mut buffer, value);
    Cow::Owned(buffer)
}

/// Write the escaped form of `value` directly to buffer
pub fn escape_into(buffer: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut copied = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(replacement) = value_escape(b) {
            // Table bytes are ASCII, so `i` is always a char boundary
            buffer.push_str(&value[copied..i]);
            buffer.push_str(replacement);
            copied = i + 1;
        }
    }
    buffer.push_str(&value[copied..]);
}

/// Rebuild a URL from a base path and the selected records.
///
/// Selected records are written as `key=escape(value)` joined by `&` and
/// appended after a single `?`, which is present even when nothing is
/// selected. Keys are written as-is and are not escaped, so a key containing
/// `&` or `=` will change the structure of the output query.
///
/// ```
/// use qsedit::{ParameterRecord, ParameterSequence};
///
/// let mut records = ParameterSequence::new();
/// records.push(ParameterRecord::parsed("q", "a b"));
/// records.push(ParameterRecord { selected: false, ..ParameterRecord::parsed("x", "1") });
///
/// let composition = qsedit::compose("http://x.com/s", &records);
/// assert_eq!(composition.url, "http://x.com/s?q=a%20b");
/// assert_eq!(composition.excluded_original_keys, vec!["x"]);
/// ```
pub fn compose(base_path: &str, records: &ParameterSequence) -> Composition {
    let mut url = String::with_capacity(base_path.len() + 1 + records.len() * 16);
    url.push_str(base_path);
    url.push('?');

    for (i, record) in records.selected().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(&record.key);
        url.push('=');
        escape_into(&mut url, &record.value);
    }

    let excluded_original_keys = records.excluded_original_keys();
    log::trace!(
        "composed {} byte URL, {} original key(s) excluded",
        url.len(),
        excluded_original_keys.len()
    );

    Composition {
        url,
        excluded_original_keys,
    }
}
