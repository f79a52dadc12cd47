//! Error types for IXDTF parsing and formatting.

use thiserror::Error;

/// Errors that can occur while parsing or validating an IXDTF string.
///
/// Every error is fatal to the call; there are no partial results. Callers
/// choose strict versus lenient per call to trade tolerance for fidelity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The portion before the first suffix element is not a valid RFC 3339
    /// timestamp.
    #[error("invalid base timestamp: {0}")]
    InvalidBaseTimestamp(String),

    /// Malformed bracket structure: unterminated element, stray characters
    /// outside brackets, or an empty `[]` pair.
    #[error("invalid suffix syntax: {0}")]
    InvalidSuffixSyntax(String),

    /// A tag key or value fails the suffix grammar, or is empty.
    #[error("invalid extension format: {0}")]
    InvalidExtensionFormat(String),

    /// A syntactically valid key in the private-use namespace (`x-`).
    #[error("private extension rejected: {0}")]
    PrivateExtensionRejected(String),

    /// A syntactically valid key in the experimental namespace (`_`).
    #[error("experimental extension rejected: {0}")]
    ExperimentalExtensionRejected(String),

    /// Unresolvable zone name (strict mode), a critical marker on a zone
    /// element, a duplicate zone element, or an invalid numeric offset.
    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// Strict mode only: the resolved zone's offset at the instant
    /// disagrees with the offset carried by the base timestamp.
    #[error("time zone offset mismatch for {zone}: zone resolves to {resolved}, timestamp carries {actual}")]
    TimeZoneOffsetMismatch {
        /// The zone reference as written in the input.
        zone: String,
        /// The offset the zone resolves to at the instant.
        resolved: String,
        /// The offset embedded in the base timestamp.
        actual: String,
    },

    /// A critical-marked key fails enforcement, in either mode.
    #[error("critical extension unresolved: {0}")]
    CriticalExtensionUnresolved(String),
}

/// Errors that can occur while formatting a timestamp with extensions.
///
/// `format` refuses to serialize an extension set that `parse` would
/// reject, so nothing invalid can round-trip silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The extension set failed re-validation before serialization.
    #[error("unserializable extensions: {0}")]
    InvalidExtensions(#[from] ParseError),
}
