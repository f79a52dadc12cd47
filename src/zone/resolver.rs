//! Zone resolution and offset consistency.
//!
//! Once the suffix is classified, a zone reference (if any) is resolved
//! and its offset at the instant is compared against the numeric offset
//! the base timestamp carries. [`ParseMode`] decides whether failures are
//! fatal or tolerated.

use chrono::{FixedOffset, Offset, TimeZone};

use crate::core::error::ParseError;
use crate::core::mode::ParseMode;
use crate::core::timestamp::Timestamp;
use crate::zone::cache::ZoneCache;
use crate::zone::offset::render_offset;
use crate::zone::{ZoneKind, ZoneRef};

/// Resolves `zone` and cross-checks it against `timestamp`'s offset.
///
/// Returns the timestamp re-expressed in the resolved zone when the
/// offsets agree, or untouched when the zone is unresolvable or
/// inconsistent in lenient mode.
pub(crate) fn apply_zone(
    timestamp: Timestamp,
    zone: &ZoneRef,
    mode: ParseMode,
    cache: &ZoneCache,
) -> Result<Timestamp, ParseError> {
    match zone.kind() {
        ZoneKind::Fixed(offset) => check_offset(timestamp, zone, *offset, mode),
        ZoneKind::Named => {
            let Some(tz) = cache.resolve(zone.name()) else {
                if mode.is_strict() {
                    return Err(ParseError::InvalidTimeZone(format!(
                        "unresolvable zone name {:?}",
                        zone.name()
                    )));
                }
                tracing::debug!("keeping unresolvable zone name {:?}", zone.name());
                return Ok(timestamp);
            };
            // Inverted-sign POSIX family; the offset comparison does not
            // apply to these names.
            if zone.name().starts_with("Etc/GMT") {
                return Ok(timestamp);
            }
            let resolved = tz.offset_from_utc_datetime(&timestamp.naive_utc()).fix();
            check_offset(timestamp, zone, resolved, mode)
        }
    }
}

fn check_offset(
    timestamp: Timestamp,
    zone: &ZoneRef,
    resolved: FixedOffset,
    mode: ParseMode,
) -> Result<Timestamp, ParseError> {
    if resolved == *timestamp.offset() {
        return Ok(timestamp.with_timezone(&resolved));
    }
    if mode.is_strict() {
        return Err(ParseError::TimeZoneOffsetMismatch {
            zone: zone.name().to_owned(),
            resolved: render_offset(resolved),
            actual: render_offset(*timestamp.offset()),
        });
    }
    tracing::warn!(
        "zone {} resolves to {} but timestamp carries {}; keeping the timestamp offset",
        zone.name(),
        render_offset(resolved),
        render_offset(*timestamp.offset()),
    );
    Ok(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::parse_base;

    fn tokyo_noon() -> Timestamp {
        parse_base("2025-06-01T12:00:00+09:00").unwrap()
    }

    #[test]
    fn test_consistent_named_zone() {
        let cache = ZoneCache::new();
        let zone = ZoneRef::named("Asia/Tokyo").unwrap();
        let ts = apply_zone(tokyo_noon(), &zone, ParseMode::Strict, &cache).unwrap();
        assert_eq!(ts, tokyo_noon());
    }

    #[test]
    fn test_mismatch_strict_is_fatal() {
        let cache = ZoneCache::new();
        let zone = ZoneRef::named("America/New_York").unwrap();
        let err = apply_zone(tokyo_noon(), &zone, ParseMode::Strict, &cache).unwrap_err();
        assert!(matches!(err, ParseError::TimeZoneOffsetMismatch { .. }));
    }

    #[test]
    fn test_mismatch_lenient_keeps_offset() {
        let cache = ZoneCache::new();
        let zone = ZoneRef::named("America/New_York").unwrap();
        let ts = apply_zone(tokyo_noon(), &zone, ParseMode::Lenient, &cache).unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_etc_gmt_family_always_consistent() {
        let cache = ZoneCache::new();
        let ts = parse_base("2025-01-01T00:00:00+05:00").unwrap();
        let zone = ZoneRef::named("Etc/GMT-5").unwrap();
        assert!(apply_zone(ts, &zone, ParseMode::Strict, &cache).is_ok());

        // Even a naively wrong pairing passes for this family.
        let other = parse_base("2025-01-01T00:00:00+07:00").unwrap();
        assert!(apply_zone(other, &zone, ParseMode::Strict, &cache).is_ok());
    }

    #[test]
    fn test_unresolvable_name_by_mode() {
        let cache = ZoneCache::new();
        let zone = ZoneRef::named("Not/AZone").unwrap();
        assert!(matches!(
            apply_zone(tokyo_noon(), &zone, ParseMode::Strict, &cache),
            Err(ParseError::InvalidTimeZone(_))
        ));
        assert!(apply_zone(tokyo_noon(), &zone, ParseMode::Lenient, &cache).is_ok());
    }

    #[test]
    fn test_fixed_offset_consistency() {
        let cache = ZoneCache::new();
        let matching = ZoneRef::fixed(FixedOffset::east_opt(9 * 3600).unwrap());
        assert!(apply_zone(tokyo_noon(), &matching, ParseMode::Strict, &cache).is_ok());

        let mismatched = ZoneRef::fixed(FixedOffset::east_opt(5 * 3600).unwrap());
        assert!(matches!(
            apply_zone(tokyo_noon(), &mismatched, ParseMode::Strict, &cache),
            Err(ParseError::TimeZoneOffsetMismatch { .. })
        ));
        assert!(apply_zone(tokyo_noon(), &mismatched, ParseMode::Lenient, &cache).is_ok());
    }
}
