//! The canonical formatter.
//!
//! The formatting inverse of the parser: base timestamp first, then the
//! zone element (if any), then tags in ascending key order. Extension sets
//! are re-validated before anything is emitted, so nothing [`parse`]
//! would reject can be serialized.
//!
//! [`parse`]: crate::parse::parse

use chrono::SecondsFormat;

use crate::core::error::FormatError;
use crate::core::timestamp::{self, Timestamp};
use crate::extensions::Extensions;

/// Formats a timestamp with extensions, seconds precision.
///
/// A zero offset is written as `Z`; fractional seconds are dropped (use
/// [`format_nano`] to keep them). Output ordering is deterministic: two
/// extension sets with the same logical content format identically,
/// whatever their insertion order was.
pub fn format(timestamp: &Timestamp, extensions: &Extensions) -> Result<String, FormatError> {
    render(timestamp, extensions, SecondsFormat::Secs)
}

/// Formats a timestamp with extensions, keeping sub-second precision.
///
/// Fractional digits are emitted in groups of three as needed, none when
/// the instant is whole-second.
pub fn format_nano(timestamp: &Timestamp, extensions: &Extensions) -> Result<String, FormatError> {
    render(timestamp, extensions, SecondsFormat::AutoSi)
}

fn render(
    timestamp: &Timestamp,
    extensions: &Extensions,
    precision: SecondsFormat,
) -> Result<String, FormatError> {
    extensions.validate()?;

    let mut out = timestamp::render_base(timestamp, precision);
    if let Some(zone) = &extensions.zone {
        out.push('[');
        out.push_str(zone.name());
        out.push(']');
    }
    for (key, value) in &extensions.tags {
        out.push('[');
        if extensions.is_critical(key) {
            out.push('!');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push(']');
    }
    Ok(out)
}
