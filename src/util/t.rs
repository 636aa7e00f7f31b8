/*!
Unit constants for converting between the various resolutions a time of day
can be expressed in.

Every constant here is an `i64` so that intermediate arithmetic can exceed
the range of a single day before being normalized.
*/

/// The number of milliseconds in one second.
pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;

/// The number of milliseconds in one minute.
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;

/// The number of milliseconds in one hour.
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// The number of milliseconds in one civil day. That is, a day with exactly
/// 24 hours and no leap seconds.
pub(crate) const MILLIS_PER_CIVIL_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// The number of hours in one civil day.
pub(crate) const HOURS_PER_CIVIL_DAY: i64 = 24;

/// The number of minutes in one civil day.
pub(crate) const MINUTES_PER_CIVIL_DAY: i64 = 24 * 60;

/// The number of 100 nanosecond ticks in one millisecond.
pub(crate) const TICKS_PER_MILLISECOND: i64 = 10_000;

/// The number of seconds in one civil day.
pub(crate) const SECONDS_PER_CIVIL_DAY: i64 = 24 * 60 * 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_consistent() {
        assert_eq!(MILLIS_PER_CIVIL_DAY, 86_400_000);
        assert_eq!(MILLIS_PER_CIVIL_DAY, HOURS_PER_CIVIL_DAY * MILLIS_PER_HOUR);
        assert_eq!(
            MILLIS_PER_CIVIL_DAY,
            MINUTES_PER_CIVIL_DAY * MILLIS_PER_MINUTE,
        );
        assert_eq!(
            MILLIS_PER_CIVIL_DAY,
            SECONDS_PER_CIVIL_DAY * MILLIS_PER_SECOND,
        );
    }
}
