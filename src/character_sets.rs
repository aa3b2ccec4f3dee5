/// Replacement for each ASCII byte that must be escaped inside a query value.
/// `None` means the byte is copied through unchanged.
///
/// Only query delimiters and the escape marker itself are covered; everything
/// else (including all non-ASCII text) is left as typed.
const VALUE_ESCAPE_TABLE: [Option<&str>; 128] = {
    let mut table = [None; 128];

    table[b'%' as usize] = Some("%25");
    table[b' ' as usize] = Some("%20");
    table[b'&' as usize] = Some("%26");
    table[b'+' as usize] = Some("%2B");
    table[b'=' as usize] = Some("%3D");
    table[b'#' as usize] = Some("%23");
    table[b'/' as usize] = Some("%2F");
    table[b'?' as usize] = Some("%3F");

    table
};

/// Look up the escape sequence for a byte of a query value
pub fn value_escape(b: u8) -> Option<&'static str> {
    // Non-ASCII bytes never need escaping
    if !b.is_ascii() {
        return None;
    }
    VALUE_ESCAPE_TABLE[b as usize]
}

/// Check if a value contains any byte from the escape table
pub fn needs_value_escape(value: &str) -> bool {
    value.bytes().any(|b| value_escape(b).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_escape_table() {
        assert_eq!(value_escape(b'%'), Some("%25"));
        assert_eq!(value_escape(b' '), Some("%20"));
        assert_eq!(value_escape(b'&'), Some("%26"));
        assert_eq!(value_escape(b'+'), Some("%2B"));
        assert_eq!(value_escape(b'='), Some("%3D"));
        assert_eq!(value_escape(b'#'), Some("%23"));
        assert_eq!(value_escape(b'/'), Some("%2F"));
        assert_eq!(value_escape(b'?'), Some("%3F"));
    }

    #[test]
    fn test_passthrough_bytes() {
        for b in [b'a', b'Z', b'0', b'-', b'_', b'.', b'~', b':', b';', b',', b'"'] {
            assert_eq!(value_escape(b), None);
        }
        // UTF-8 continuation and lead bytes
        assert_eq!(value_escape(0xC3), None);
        assert_eq!(value_escape(0xA9), None);
    }

    #[test]
    fn test_needs_value_escape() {
        assert!(needs_value_escape("a b"));
        assert!(needs_value_escape("100%"));
        assert!(!needs_value_escape("plain-value_1.0"));
        assert!(!needs_value_escape("café"));
        assert!(!needs_value_escape(""));
    }
}
