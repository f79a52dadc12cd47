//! # IXDTF
//!
//! **I**nternet E**x**tended **D**ate/**T**ime **F**ormat (RFC 9557)
//!
//! IXDTF extends RFC 3339 timestamps with bracketed suffix elements that
//! carry a time zone identifier and/or `key=value` extension tags. This
//! crate parses, validates, and canonically formats that suffix grammar:
//!
//! - **Compatibility**: every valid RFC 3339 timestamp is valid input;
//!   suffix elements are purely additive
//! - **Strictness on demand**: zone-resolution failures and offset
//!   inconsistencies are fatal in [`ParseMode::Strict`], tolerated and
//!   recorded in [`ParseMode::Lenient`]
//! - **Critical tags**: elements marked `!` must be resolvable or the
//!   whole input is rejected, in both modes
//! - **Determinism**: formatting emits the zone first, then tags in
//!   ascending key order, so equal extension sets serialize identically
//!
//! ## Modules
//!
//! - [`core`]: error taxonomy, parse mode, and the base-timestamp seam
//! - [`grammar`]: character-class predicates, suffix tokenizer, element
//!   classifier
//! - [`extensions`]: the parsed suffix data model and critical-tag
//!   enforcement
//! - [`zone`]: zone references, numeric offsets, name resolution, and the
//!   process-wide zone cache
//! - [`parse`](mod@parse) / [`format`](mod@format): the public pipelines
//!
//! ## Example Usage
//!
//! ```rust
//! use ixdtf::{ParseMode, format, parse};
//!
//! let input = "2006-01-02T15:04:05+09:00[Asia/Tokyo][u-ca=japanese]";
//! let (timestamp, extensions) = parse(input, ParseMode::Strict)?;
//!
//! assert_eq!(extensions.zone.as_ref().map(|z| z.name()), Some("Asia/Tokyo"));
//! assert_eq!(extensions.tags["u-ca"], "japanese");
//!
//! // The canonical formatter is the inverse of the parser.
//! assert_eq!(format(&timestamp, &extensions)?, input);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod extensions;
pub mod format;
pub mod grammar;
pub mod parse;
pub mod zone;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{FormatError, ParseError, ParseMode, Timestamp};
    pub use crate::extensions::Extensions;
    pub use crate::format::{format, format_nano};
    pub use crate::parse::{parse, parse_with_cache, validate, validate_with_cache};
    pub use crate::zone::{ZoneCache, ZoneRef};
}

// Re-export commonly used items at crate root
pub use crate::core::{FormatError, ParseError, ParseMode, Timestamp};
pub use crate::extensions::Extensions;
pub use crate::format::{format, format_nano};
pub use crate::parse::{parse, parse_with_cache, validate, validate_with_cache};
pub use crate::zone::{ZoneCache, ZoneRef};
