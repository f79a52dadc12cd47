//! The parsed suffix information attached to a timestamp.
//!
//! [`Extensions`] is built once per parse call by folding classified
//! elements in, and re-validated once per format call before anything is
//! emitted. There is no other lifecycle.
//!
//! ## Namespace policy
//!
//! - `u-…` and other registered keys: accepted
//! - `x-`/`X-` prefix: private use, rejected outright
//! - `_` prefix: experimental, rejected outright
//!
//! Rejection of the private and experimental namespaces is a protocol
//! decision layered on top of the key grammar (the grammar itself accepts
//! `_`-initial keys), and it is unaffected by critical marking.

mod critical;
mod set;

pub use set::Extensions;

pub(crate) use critical::enforce as enforce_critical;
