//! Parse policy.

/// Tolerance policy for zone resolution and offset consistency.
///
/// The mode only affects the time-zone stage: unresolvable zone names and
/// offsets that disagree with the timestamp's own offset. Grammar errors,
/// namespace policy, and critical-tag enforcement are fatal in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Zone-resolution failures and offset inconsistencies are fatal.
    Strict,
    /// Zone-resolution failures and offset inconsistencies are tolerated:
    /// the zone reference is retained in the output and the timestamp
    /// keeps its original offset.
    #[default]
    Lenient,
}

impl ParseMode {
    /// Whether zone problems are promoted to fatal errors.
    pub fn is_strict(self) -> bool {
        matches!(self, ParseMode::Strict)
    }
}
