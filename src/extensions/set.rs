//! The extension set data model.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::error::ParseError;
use crate::grammar::classifier::{SuffixElement, check_namespace};
use crate::grammar::predicates::{is_valid_key, is_valid_value};
use crate::zone::ZoneRef;

use super::critical;

/// Parsed suffix information: zone reference, tags, and critical markers.
///
/// Immutable after construction-time validation succeeds on the parse
/// side; validated again before serialization on the format side, so an
/// invalid set can be built by hand but never round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    /// The time-zone reference, at most one per input.
    pub zone: Option<ZoneRef>,
    /// Extension tags. Keys are unique; on duplicate input elements the
    /// first occurrence wins and later ones are silently discarded.
    pub tags: BTreeMap<String, String>,
    /// Keys marked critical (`!`) in the input, always a subset of the
    /// tag keys.
    pub critical: BTreeSet<String>,
}

impl Extensions {
    /// Creates an empty extension set.
    pub fn new() -> Self {
        Extensions::default()
    }

    /// Whether the set carries no zone and no tags.
    pub fn is_empty(&self) -> bool {
        self.zone.is_none() && self.tags.is_empty()
    }

    /// Whether `key` was marked critical.
    pub fn is_critical(&self, key: &str) -> bool {
        self.critical.contains(key)
    }

    /// Folds one classified element into the set.
    ///
    /// Duplicate tag keys are discarded (first occurrence wins, not an
    /// error); a second zone element is fatal.
    pub(crate) fn absorb(&mut self, element: SuffixElement) -> Result<(), ParseError> {
        match element {
            SuffixElement::Zone(zone) => {
                if self.zone.is_some() {
                    return Err(ParseError::InvalidTimeZone(
                        "duplicate time zone suffix element".to_string(),
                    ));
                }
                self.zone = Some(zone);
            }
            SuffixElement::Tag {
                key,
                value,
                critical,
            } => {
                if self.tags.contains_key(&key) {
                    return Ok(());
                }
                if critical {
                    self.critical.insert(key.clone());
                }
                self.tags.insert(key, value);
            }
        }
        Ok(())
    }

    /// Re-validates the set exactly as the parser would.
    ///
    /// The formatter calls this before emitting anything; a set this
    /// method rejects cannot be serialized. Zone resolvability is not
    /// re-checked here — a lenient parse retains unresolved zone names,
    /// and those must round-trip. Zone syntax needs no re-check either:
    /// [`ZoneRef`] is only constructible through validating constructors.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (key, value) in &self.tags {
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
        }
        critical::enforce(self)
    }
}
