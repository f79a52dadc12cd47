//! Element classifier and validator.
//!
//! Each raw bracket interior is either a time-zone reference or a
//! `key=value` tag, decided by scanning for a top-level `=`. The result is
//! a tagged variant so each branch's invariants stay explicit.

use crate::core::error::ParseError;
use crate::grammar::predicates::{is_valid_key, is_valid_value};
use crate::zone::ZoneRef;

/// A classified, validated suffix element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SuffixElement {
    /// A time-zone reference, named or fixed numeric offset.
    Zone(ZoneRef),
    /// A `key=value` extension tag.
    Tag {
        /// Validated tag key.
        key: String,
        /// Validated tag value.
        value: String,
        /// Whether the element carried the `!` marker.
        critical: bool,
    },
}

/// Classifies and validates one raw element interior.
pub(crate) fn classify(raw: &str) -> Result<SuffixElement, ParseError> {
    let (critical, body) = match raw.strip_prefix('!') {
        Some("") => {
            return Err(ParseError::InvalidSuffixSyntax(
                "suffix element consists only of '!'".to_string(),
            ));
        }
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let Some(eq) = body.find('=') else {
        // Zone candidate. A zone reference can never be critical.
        if critical {
            return Err(ParseError::InvalidTimeZone(format!(
                "time zone reference {body:?} cannot be critical"
            )));
        }
        return Ok(SuffixElement::Zone(ZoneRef::from_element(body)?));
    };

    let (key, value) = (&body[..eq], &body[eq + 1..]);
    if key.is_empty() || value.is_empty() {
        return Err(ParseError::InvalidExtensionFormat(format!(
            "empty key or value in {raw:?}"
        )));
    }
    if !is_valid_key(key) {
        return Err(ParseError::InvalidExtensionFormat(format!(
            "invalid key {key:?}"
        )));
    }
    if !is_valid_value(value) {
        return Err(ParseError::InvalidExtensionFormat(format!(
            "invalid value {value:?} for key {key:?}"
        )));
    }
    check_namespace(key)?;

    Ok(SuffixElement::Tag {
        key: key.to_owned(),
        value: value.to_owned(),
        critical,
    })
}

/// Namespace policy for tag keys, applied after the grammar predicates.
///
/// Rejection is unconditional: the critical marker does not change it.
/// This is a protocol-level restriction layered on top of the syntax, kept
/// as its own phase so the policy can change without touching the grammar.
pub(crate) fn check_namespace(key: &str) -> Result<(), ParseError> {
    let bytes = key.as_bytes();
    if bytes.len() >= 2 && bytes[0].eq_ignore_ascii_case(&b'x') && bytes[1] == b'-' {
        return Err(ParseError::PrivateExtensionRejected(key.to_owned()));
    }
    if bytes.first() == Some(&b'_') {
        return Err(ParseError::ExperimentalExtensionRejected(key.to_owned()));
    }
    Ok(())
}
