//! Time-zone references, resolution, and the zone-name cache.
//!
//! A suffix element without `=` is a zone candidate: either an IANA-style
//! name (`Asia/Tokyo`) or a fixed numeric offset (`+09:00`). Names resolve
//! through [`ZoneCache`] against the bundled IANA database; offsets
//! resolve directly. The resolver then cross-checks the zone's offset at
//! the instant against the offset carried by the base timestamp.

pub mod cache;
pub(crate) mod offset;
pub(crate) mod resolver;

pub use cache::ZoneCache;

use std::fmt;

use chrono::FixedOffset;

use crate::core::error::ParseError;
use crate::grammar::predicates::is_valid_zone_name;

/// A time-zone reference carried by a suffix element.
///
/// At most one per input, never critical (both enforced structurally).
/// The literal text as written is preserved so formatting reproduces the
/// input, resolved or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRef {
    literal: String,
    kind: ZoneKind,
}

/// How a zone reference resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ZoneKind {
    /// Resolved by name through the zone database.
    Named,
    /// A fixed numeric offset; no database lookup involved.
    Fixed(FixedOffset),
}

impl ZoneRef {
    /// Creates a named zone reference, validating the name syntax.
    ///
    /// Whether the name actually resolves is decided at parse time against
    /// the zone database; this only rejects names the grammar disallows.
    pub fn named(name: impl Into<String>) -> Result<Self, ParseError> {
        let literal = name.into();
        if !is_valid_zone_name(&literal) {
            return Err(ParseError::InvalidTimeZone(format!(
                "invalid zone name {literal:?}"
            )));
        }
        Ok(ZoneRef {
            literal,
            kind: ZoneKind::Named,
        })
    }

    /// Creates a fixed-offset zone reference.
    ///
    /// The literal is synthesized in `±HH:MM` form so the result of
    /// formatting re-parses.
    pub fn fixed(offset: FixedOffset) -> Self {
        ZoneRef {
            literal: offset::render_offset(offset),
            kind: ZoneKind::Fixed(offset),
        }
    }

    /// Builds a zone reference from a raw suffix-element interior.
    pub(crate) fn from_element(content: &str) -> Result<Self, ParseError> {
        match content.as_bytes().first() {
            Some(b'+') | Some(b'-') => {
                let parsed = offset::parse_offset(content)?;
                Ok(ZoneRef {
                    literal: content.to_owned(),
                    kind: ZoneKind::Fixed(parsed),
                })
            }
            _ => ZoneRef::named(content),
        }
    }

    /// The zone reference as written (or synthesized for fixed offsets).
    pub fn name(&self) -> &str {
        &self.literal
    }

    /// The canonical name: the literal for named zones, the compact form
    /// (`+0900`) for fixed offsets.
    pub fn canonical_name(&self) -> String {
        match &self.kind {
            ZoneKind::Named => self.literal.clone(),
            ZoneKind::Fixed(offset) => offset::compact_name(*offset),
        }
    }

    /// The fixed offset, if this reference is numeric.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        match &self.kind {
            ZoneKind::Named => None,
            ZoneKind::Fixed(offset) => Some(*offset),
        }
    }

    /// Whether this reference is a fixed numeric offset.
    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, ZoneKind::Fixed(_))
    }

    pub(crate) fn kind(&self) -> &ZoneKind {
        &self.kind
    }
}

impl fmt::Display for ZoneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_zone() {
        let zone = ZoneRef::named("Asia/Tokyo").unwrap();
        assert_eq!(zone.name(), "Asia/Tokyo");
        assert_eq!(zone.canonical_name(), "Asia/Tokyo");
        assert!(!zone.is_fixed());
    }

    #[test]
    fn test_named_zone_rejects_bad_syntax() {
        assert!(ZoneRef::named("Asia//Tokyo").is_err());
        assert!(ZoneRef::named("").is_err());
    }

    #[test]
    fn test_fixed_zone_literal_reparses() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let zone = ZoneRef::fixed(offset);
        assert_eq!(zone.name(), "+09:00");
        assert_eq!(zone.canonical_name(), "+0900");
        assert_eq!(ZoneRef::from_element(zone.name()).unwrap(), zone);
    }

    #[test]
    fn test_from_element_dispatch() {
        assert!(ZoneRef::from_element("+05:30").unwrap().is_fixed());
        assert!(!ZoneRef::from_element("UTC").unwrap().is_fixed());
        assert!(ZoneRef::from_element("+24:00").is_err());
    }
}
