//! Base-timestamp seam.
//!
//! The portion of the input before the first `[` is a plain RFC 3339
//! timestamp; parsing and rendering it is delegated to `chrono`. This
//! module is the only place that delegation happens, so the suffix engine
//! stays independent of the calendar arithmetic underneath.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use super::error::ParseError;

/// An instant together with the numeric UTC offset carried by the base
/// timestamp.
///
/// The offset is exactly the one written in the input. A consistent,
/// resolved zone suffix re-expresses the instant in the zone's offset at
/// that instant; a tolerated inconsistency leaves the original offset
/// untouched.
pub type Timestamp = DateTime<FixedOffset>;

/// Parses the unsuffixed RFC 3339 portion, fractional seconds included.
pub(crate) fn parse_base(s: &str) -> Result<Timestamp, ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map_err(|err| ParseError::InvalidBaseTimestamp(format!("{s:?}: {err}")))
}

/// Renders the RFC 3339 portion. A zero offset is written as `Z`.
pub(crate) fn render_base(timestamp: &Timestamp, precision: SecondsFormat) -> String {
    timestamp.to_rfc3339_opts(precision, true)
}
