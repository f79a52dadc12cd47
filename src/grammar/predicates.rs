//! Character-class predicates for the suffix grammar.
//!
//! Pure functions over bytes; no allocation, no state. Multi-byte UTF-8
//! sequences fail every class below, so non-ASCII input is rejected
//! without a separate check.

/// Checks a tag key: first byte `a-z` or `_`, then `a-z`, `0-9`, `-`, `_`.
pub fn is_valid_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_lowercase() && first != b'_' {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Checks a tag value: one or more alphanumeric segments joined by single
/// hyphens. No leading, trailing, or doubled hyphen; segments may mix
/// case.
pub fn is_valid_value(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut segment_len = 0usize;
    for &b in s.as_bytes() {
        if b == b'-' {
            if segment_len == 0 {
                return false;
            }
            segment_len = 0;
        } else if b.is_ascii_alphanumeric() {
            segment_len += 1;
        } else {
            return false;
        }
    }
    segment_len > 0
}

/// Checks zone-name syntax: `/`-separated path segments, each starting
/// with a letter or underscore followed by letters, digits, `.`, `_`,
/// `+`, or `-`.
///
/// This is a syntax check only; whether the name resolves is the
/// resolver's concern.
pub fn is_valid_zone_name(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.split('/').all(|segment| {
        let bytes = segment.as_bytes();
        let Some(&first) = bytes.first() else {
            return false;
        };
        if !first.is_ascii_alphabetic() && first != b'_' {
            return false;
        }
        bytes[1..].iter().all(|&b| {
            b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'+' || b == b'-'
        })
    })
}

/// Whole-string structural check: a non-empty bracket-free base portion
/// followed by zero or more non-empty, non-nested bracket pairs.
///
/// This is a defensive cross-check, not primary control flow; the
/// tokenizer and classifier enforce strictly more than this.
pub fn is_structurally_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    let base_end = bytes
        .iter()
        .position(|&b| b == b'[')
        .unwrap_or(bytes.len());
    if base_end == 0 || bytes[..base_end].contains(&b']') {
        return false;
    }

    let mut i = base_end;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            return false;
        }
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] != b']' && bytes[j] != b'[' {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != b']' || j == i + 1 {
            return false;
        }
        i = j + 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(is_valid_key("u-ca"));
        assert!(is_valid_key("_experimental"));
        assert!(is_valid_key("key_2"));
        assert!(is_valid_key("a"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("U-ca"));
        assert!(!is_valid_key("1key"));
        assert!(!is_valid_key("-key"));
        assert!(!is_valid_key("key!"));
        assert!(!is_valid_key("kéy"));
    }

    #[test]
    fn test_valid_values() {
        assert!(is_valid_value("japanese"));
        assert!(is_valid_value("Latn"));
        assert!(is_valid_value("abc-DEF-123"));
        assert!(is_valid_value("0"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(!is_valid_value(""));
        assert!(!is_valid_value("-leading"));
        assert!(!is_valid_value("trailing-"));
        assert!(!is_valid_value("double--hyphen"));
        assert!(!is_valid_value("under_score"));
        assert!(!is_valid_value("dot.ted"));
    }

    #[test]
    fn test_valid_zone_names() {
        assert!(is_valid_zone_name("UTC"));
        assert!(is_valid_zone_name("Asia/Tokyo"));
        assert!(is_valid_zone_name("America/Argentina/Buenos_Aires"));
        assert!(is_valid_zone_name("Etc/GMT-5"));
        assert!(is_valid_zone_name("Etc/GMT+12"));
        assert!(is_valid_zone_name("_private/Zone.1"));
    }

    #[test]
    fn test_invalid_zone_names() {
        assert!(!is_valid_zone_name(""));
        assert!(!is_valid_zone_name("/Tokyo"));
        assert!(!is_valid_zone_name("Asia/"));
        assert!(!is_valid_zone_name("Asia//Tokyo"));
        assert!(!is_valid_zone_name("9pm/Somewhere"));
        assert!(!is_valid_zone_name("+09:00"));
    }

    #[test]
    fn test_structural_check() {
        assert!(is_structurally_valid("2006-01-02T15:04:05Z"));
        assert!(is_structurally_valid("2006-01-02T15:04:05Z[UTC][u-ca=japanese]"));
        assert!(!is_structurally_valid(""));
        assert!(!is_structurally_valid("[UTC]"));
        assert!(!is_structurally_valid("2006-01-02T15:04:05Z[]"));
        assert!(!is_structurally_valid("2006-01-02T15:04:05Z[UTC"));
        assert!(!is_structurally_valid("2006-01-02T15:04:05Z[UTC]x"));
        assert!(!is_structurally_valid("2006-01-02T15:04:05Z[a[b]]"));
    }
}
