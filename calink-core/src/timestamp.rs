//! Date-time normalization for provider query parameters.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{LinkError, LinkResult};

/// Formats produced by a `datetime-local` picker.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a date-time string into a UTC instant.
///
/// Picker values carry no offset and are read as wall-clock time in `zone`.
/// Strings with an explicit offset (RFC 3339) keep it, and a bare date is
/// taken as midnight UTC.
pub fn parse_local(input: &str, zone: Tz) -> LinkResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(resolve_wall_clock(naive, zone));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(LinkError::DateTime(format!(
        "'{}'. Expected YYYY-MM-DDTHH:mm",
        input
    )))
}

/// Map a wall-clock time in `zone` to an instant.
///
/// Repeated times (DST fall-back) take the earlier instant. Skipped times
/// (DST spring-forward) are read with the offset in force before the jump,
/// so 02:30 in a 02:00 -> 03:00 gap lands on 03:30 local.
fn resolve_wall_clock(naive: NaiveDateTime, zone: Tz) -> DateTime<Utc> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            let before = zone
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            tracing::debug!("{} is skipped in {}, using offset {}", naive, zone, before);
            (naive - Duration::seconds(i64::from(before.local_minus_utc()))).and_utc()
        }
    }
}

/// Render an instant as a compact UTC timestamp, e.g. `20240115T120000Z`.
pub fn compact(instant: &DateTime<Utc>) -> String {
    instant
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'T' || *c == 'Z')
        .collect()
}

/// A date field as typed, paired with the instant it denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTimestamp {
    pub raw: String,
    pub instant: DateTime<Utc>,
}

impl EventTimestamp {
    /// Resolve an optional picker value.
    ///
    /// Missing, blank and unparsable values all resolve to `None`.
    pub fn resolve(raw: Option<&str>, zone: Tz) -> Option<Self> {
        let raw = raw.filter(|s| !s.trim().is_empty())?;

        match parse_local(raw, zone) {
            Ok(instant) => Some(EventTimestamp {
                raw: raw.to_string(),
                instant,
            }),
            Err(e) => {
                tracing::debug!("Ignoring date field: {}", e);
                None
            }
        }
    }

    pub fn compact(&self) -> String {
        compact(&self.instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_picker_value_in_utc() {
        let instant = parse_local("2024-01-15T12:00", Tz::UTC).unwrap();
        assert_eq!(compact(&instant), "20240115T120000Z");
    }

    #[test]
    fn test_parse_picker_value_with_seconds() {
        let instant = parse_local("2024-01-15T12:00:30.250", Tz::UTC).unwrap();
        assert_eq!(compact(&instant), "20240115T120030Z");
    }

    #[test]
    fn test_parse_uses_zone() {
        let instant = parse_local("2024-01-15T12:00", chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(compact(&instant), "20240115T110000Z");

        let instant = parse_local("2024-07-15T12:00", chrono_tz::America::New_York).unwrap();
        assert_eq!(compact(&instant), "20240715T160000Z");
    }

    #[test]
    fn test_parse_keeps_explicit_offset() {
        let instant = parse_local("2024-01-15T12:00:00+02:00", chrono_tz::Asia::Tokyo).unwrap();
        assert_eq!(compact(&instant), "20240115T100000Z");
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let instant = parse_local("2024-01-15", chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(compact(&instant), "20240115T000000Z");
    }

    #[test]
    fn test_parse_dst_gap_shifts_forward() {
        // Clocks jump from 02:00 to 03:00 in Berlin on this day
        let instant = parse_local("2024-03-31T02:30", chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(compact(&instant), "20240331T013000Z");

        // New York skips 02:00-03:00 on 2024-03-10; EST (-05:00) still applies
        let instant = parse_local("2024-03-10T02:15", chrono_tz::America::New_York).unwrap();
        assert_eq!(compact(&instant), "20240310T071500Z");
    }

    #[test]
    fn test_parse_dst_overlap_takes_earliest() {
        // 02:30 happens twice in Berlin on this day; the first is still CEST (+02:00)
        let instant = parse_local("2024-10-27T02:30", chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(compact(&instant), "20241027T003000Z");
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(parse_local("next tuesday", Tz::UTC).is_err());
        assert!(parse_local("2024-13-45T12:00", Tz::UTC).is_err());
    }

    #[test]
    fn test_resolve_degrades_to_none() {
        assert_eq!(EventTimestamp::resolve(None, Tz::UTC), None);
        assert_eq!(EventTimestamp::resolve(Some(""), Tz::UTC), None);
        assert_eq!(EventTimestamp::resolve(Some("not a date"), Tz::UTC), None);

        let ts = EventTimestamp::resolve(Some("2024-01-15T13:00"), Tz::UTC).unwrap();
        assert_eq!(ts.raw, "2024-01-15T13:00");
        assert_eq!(ts.compact(), "20240115T130000Z");
    }
}
