//! The parse and validate pipelines.
//!
//! Control flow: split at the first `[`, delegate the prefix to the base
//! parser, tokenize the suffix, classify and fold each element, resolve
//! and cross-check the zone, enforce critical tags. Every error is fatal
//! to the call; there are no partial results.

use crate::core::error::ParseError;
use crate::core::mode::ParseMode;
use crate::core::timestamp::{self, Timestamp};
use crate::extensions::{Extensions, enforce_critical};
use crate::grammar::classifier::classify;
use crate::grammar::predicates::is_structurally_valid;
use crate::grammar::tokenizer::tokenize;
use crate::zone::cache::{ZoneCache, process_cache};
use crate::zone::resolver::apply_zone;

/// Parses an IXDTF string into a timestamp and its extensions.
///
/// Zone names resolve through the process-wide cache; use
/// [`parse_with_cache`] to supply an isolated one.
///
/// ```rust
/// use ixdtf::{ParseMode, parse};
///
/// let (_, ext) = parse(
///     "2006-01-02T15:04:05Z[u-ca=japanese][u-ca=gregorian]",
///     ParseMode::Strict,
/// )?;
/// // Duplicate keys: the first occurrence wins.
/// assert_eq!(ext.tags["u-ca"], "japanese");
/// # Ok::<(), ixdtf::ParseError>(())
/// ```
pub fn parse(input: &str, mode: ParseMode) -> Result<(Timestamp, Extensions), ParseError> {
    parse_with_cache(input, mode, process_cache())
}

/// [`parse`] with a caller-owned zone cache.
pub fn parse_with_cache(
    input: &str,
    mode: ParseMode,
    cache: &ZoneCache,
) -> Result<(Timestamp, Extensions), ParseError> {
    let (base, suffix) = split_at_suffix(input);
    if base.is_empty() {
        return Err(ParseError::InvalidBaseTimestamp(
            "empty datetime portion".to_string(),
        ));
    }
    let timestamp = timestamp::parse_base(base)?;

    let mut extensions = Extensions::new();
    for raw in tokenize(suffix)? {
        extensions.absorb(classify(raw)?)?;
    }

    let timestamp = match &extensions.zone {
        Some(zone) => apply_zone(timestamp, zone, mode, cache)?,
        None => timestamp,
    };
    enforce_critical(&extensions)?;

    debug_assert!(is_structurally_valid(input));
    Ok((timestamp, extensions))
}

/// Runs the full parse pipeline without constructing output.
///
/// Cheap syntax/semantic checking; accepts exactly the inputs [`parse`]
/// accepts in the same mode.
pub fn validate(input: &str, mode: ParseMode) -> Result<(), ParseError> {
    validate_with_cache(input, mode, process_cache())
}

/// [`validate`] with a caller-owned zone cache.
pub fn validate_with_cache(
    input: &str,
    mode: ParseMode,
    cache: &ZoneCache,
) -> Result<(), ParseError> {
    parse_with_cache(input, mode, cache).map(|_| ())
}

/// Splits the input at the first `[`; the suffix portion may be empty.
fn split_at_suffix(input: &str) -> (&str, &str) {
    match input.find('[') {
        Some(i) => input.split_at(i),
        None => (input, ""),
    }
}
