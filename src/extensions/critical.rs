//! Critical-tag enforcement.
//!
//! A critical marker is an authoring demand, not a tolerance knob:
//! enforcement is identical in strict and lenient modes, on parse and on
//! format.

use crate::core::error::ParseError;

use super::set::Extensions;

/// Checks that every critical-marked key resolves.
///
/// A critical key must be present in the tag set with a non-empty value.
/// Presence and non-emptiness are structurally guaranteed for parsed
/// input; they are re-checked here because hand-built sets reach this
/// path through the formatter.
pub(crate) fn enforce(extensions: &Extensions) -> Result<(), ParseError> {
    for key in &extensions.critical {
        let Some(value) = extensions.tags.get(key) else {
            return Err(ParseError::CriticalExtensionUnresolved(format!(
                "critical key {key:?} has no tag"
            )));
        };
        if !is_resolvable(key, value) {
            return Err(ParseError::CriticalExtensionUnresolved(format!(
                "critical key {key:?} has an unresolvable value"
            )));
        }
    }
    Ok(())
}

/// Per-key resolvability rule; category-specific checks hook in here.
fn is_resolvable(_key: &str, value: &str) -> bool {
    !value.is_empty()
}
