//! Numeric offset suffixes.
//!
//! A zone candidate starting with `+` or `-` must be exactly `±HH:MM`,
//! hours 00-23, minutes 00-59. Anything else, `+24:00` included, is
//! invalid.

use chrono::FixedOffset;

use crate::core::error::ParseError;

/// Parses a `±HH:MM` offset suffix.
pub(crate) fn parse_offset(s: &str) -> Result<FixedOffset, ParseError> {
    let b = s.as_bytes();
    let shaped = b.len() == 6
        && (b[0] == b'+' || b[0] == b'-')
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3] == b':'
        && b[4].is_ascii_digit()
        && b[5].is_ascii_digit();
    if !shaped {
        return Err(ParseError::InvalidTimeZone(format!(
            "invalid numeric offset {s:?}, expected ±HH:MM"
        )));
    }

    let hours = i32::from((b[1] - b'0') * 10 + (b[2] - b'0'));
    let minutes = i32::from((b[4] - b'0') * 10 + (b[5] - b'0'));
    if hours > 23 || minutes > 59 {
        return Err(ParseError::InvalidTimeZone(format!(
            "numeric offset {s:?} out of range"
        )));
    }

    let mut seconds = hours * 3600 + minutes * 60;
    if b[0] == b'-' {
        seconds = -seconds;
    }
    FixedOffset::east_opt(seconds).ok_or_else(|| {
        ParseError::InvalidTimeZone(format!("numeric offset {s:?} out of range"))
    })
}

/// Renders an offset in the suffix form `±HH:MM`.
pub(crate) fn render_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// Synthesized compact name for a fixed-offset zone, e.g. `+0900`.
pub(crate) fn compact_name(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("{sign}{:02}{:02}", abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_valid() {
        assert_eq!(
            parse_offset("+09:00").unwrap(),
            FixedOffset::east_opt(9 * 3600).unwrap()
        );
        assert_eq!(
            parse_offset("-05:30").unwrap(),
            FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
        );
        assert_eq!(parse_offset("+00:00").unwrap(), FixedOffset::east_opt(0).unwrap());
        assert_eq!(
            parse_offset("+23:59").unwrap(),
            FixedOffset::east_opt(23 * 3600 + 59 * 60).unwrap()
        );
    }

    #[test]
    fn test_parse_offset_hour_range() {
        assert!(parse_offset("+24:00").is_err());
        assert!(parse_offset("-24:00").is_err());
    }

    #[test]
    fn test_parse_offset_minute_range() {
        assert!(parse_offset("+09:60").is_err());
    }

    #[test]
    fn test_parse_offset_shape() {
        assert!(parse_offset("+9:00").is_err());
        assert!(parse_offset("09:00").is_err());
        assert!(parse_offset("+0900").is_err());
        assert!(parse_offset("+09:0a").is_err());
        assert!(parse_offset("+09:00:00").is_err());
    }

    #[test]
    fn test_render_and_compact() {
        let offset = FixedOffset::west_opt(4 * 3600 + 30 * 60).unwrap();
        assert_eq!(render_offset(offset), "-04:30");
        assert_eq!(compact_name(offset), "-0430");

        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(render_offset(utc), "+00:00");
        assert_eq!(compact_name(utc), "+0000");
    }
}
