//! The suffix grammar engine.
//!
//! Three leaf-first layers, each usable on its own:
//!
//! - [`predicates`]: pure character-class checks for keys, values, and
//!   zone names, plus a defensive whole-string structural check
//! - [`tokenizer`]: splits the suffix portion into bracketed elements
//! - [`classifier`]: decides per element between a zone reference and a
//!   `key=value` tag, and validates it
//!
//! Wire grammar (informative):
//!
//! ```text
//! input          = base-timestamp *suffix-element
//! suffix-element = "[" ["!"] ( zone-ref / tag ) "]"
//! zone-ref       = zone-name / signed-offset
//! tag            = key "=" value
//! key            = (lcalpha / "_") *(lcalpha / DIGIT / "-" / "_")
//! value          = 1*alnum *("-" 1*alnum)
//! ```
//!
//! The constraints that are awkward as regular expressions (no consecutive
//! hyphens, first-wins duplicates, critical-marker stripping) are written
//! as explicit byte scans instead.

pub mod predicates;
pub(crate) mod classifier;
pub(crate) mod tokenizer;

pub use predicates::{is_structurally_valid, is_valid_key, is_valid_value, is_valid_zone_name};
