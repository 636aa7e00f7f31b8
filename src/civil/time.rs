use core::{
    ops::{Add, AddAssign, Sub, SubAssign},
    time::Duration,
};

use alloc::string::{String, ToString};

use crate::{
    civil::SourceTime,
    error::{civil::Error as E, Error},
    fmt::{self, Format, TimeOfDayParser},
    util::t,
};

/// A representation of a time of day with millisecond precision.
///
/// Conceptually, a `TimeOfDay` value corresponds to the hours, minutes and
/// seconds that you might see on a 24-hour clock, along with a millisecond.
/// It isn't associated with any date or time zone.
///
/// Internally, a `TimeOfDay` is the number of milliseconds that have elapsed
/// since midnight. Every value is in the range `[0, 86_400_000)`, where `0`
/// corresponds to `00:00:00.000` ([`TimeOfDay::MIN`]) and `86_399_999`
/// corresponds to `23:59:59.999` ([`TimeOfDay::MAX`]). All days are assumed
/// to have exactly 24 hours. Leap seconds are not supported.
///
/// # Default value
///
/// For convenience, this type implements the `Default` trait. Its default
/// value is midnight. i.e., `00:00:00.000`.
///
/// # Comparisons
///
/// The `TimeOfDay` type provides both `Eq` and `Ord` trait implementations.
/// When a time `t1` occurs before a time `t2` on the same day, then
/// `t1 < t2`. For example:
///
/// ```
/// use timeofday::civil::TimeOfDay;
///
/// let t1 = TimeOfDay::constant(7, 30, 1, 0);
/// let t2 = TimeOfDay::constant(8, 10, 0, 0);
/// assert!(t1 < t2);
/// ```
///
/// To ask whether a time falls within a window that might span midnight,
/// use [`TimeOfDay::is_between`].
///
/// # Arithmetic
///
/// All arithmetic wraps around midnight, since that corresponds to how
/// clocks showing the time of day behave in practice:
///
/// * [`TimeOfDay::wrapping_add`] and [`TimeOfDay::wrapping_sub`] add or
/// subtract a number of milliseconds.
/// * [`TimeOfDay::add_hours`] and [`TimeOfDay::add_minutes`] are conveniences
/// for common units.
/// * [`TimeOfDay::overflowing_add`] additionally reports how many days the
/// result wrapped across.
///
/// Wrapping arithmetic is also available via the `Add` and `Sub` trait
/// implementations with [`core::time::Duration`]:
///
/// ```
/// use core::time::Duration;
///
/// use timeofday::civil::TimeOfDay;
///
/// let time = TimeOfDay::constant(23, 30, 0, 0);
/// assert_eq!(time + Duration::from_secs(3600), TimeOfDay::constant(0, 30, 0, 0));
/// ```
///
/// # Formatting and parsing
///
/// A `TimeOfDay` can be printed with one of a small set of format tokens.
/// See [`Format`] for the supported tokens and what they produce. The
/// `Display` implementation uses [`Format::ShortTime`]:
///
/// ```
/// use timeofday::civil::TimeOfDay;
///
/// let time = TimeOfDay::constant(9, 5, 3, 100);
/// assert_eq!(time.to_string(), "09:05");
/// assert_eq!(time.format("T")?, "09:05:03");
/// assert_eq!(time.format("o")?, "09:05:03.1000000");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Parsing accepts `HH:mm`, `HH:mm:ss` or `HH:mm:ss.fraction`. See
/// [`TimeOfDay::parse`] for details.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TimeOfDay {
    /// The number of milliseconds since midnight.
    ///
    /// This is always in the range `0..86_400_000`.
    millisecond: i32,
}

impl TimeOfDay {
    /// The minimum representable time of day.
    ///
    /// This corresponds to `00:00:00.000`.
    pub const MIN: TimeOfDay = TimeOfDay::midnight();

    /// The maximum representable time of day.
    ///
    /// This corresponds to `23:59:59.999`.
    pub const MAX: TimeOfDay = TimeOfDay::constant(23, 59, 59, 999);

    /// Creates a new `TimeOfDay` from its component hour, minute, second and
    /// millisecond values.
    ///
    /// The components are simply summed into a total number of milliseconds.
    /// None of them are checked against an upper bound, so `minute = 90`
    /// is accepted and behaves like one hour and thirty minutes. A total
    /// that reaches one day or more wraps around midnight.
    ///
    /// # Errors
    ///
    /// This returns an error if any of the components are negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(21, 30, 5, 250)?;
    /// assert_eq!(t.hour(), 21);
    /// assert_eq!(t.minute(), 30);
    /// assert_eq!(t.second(), 5);
    /// assert_eq!(t.millisecond(), 250);
    ///
    /// // Components are folded into the total.
    /// assert_eq!(TimeOfDay::new(1, 90, 0, 0)?, TimeOfDay::constant(2, 30, 0, 0));
    ///
    /// // But negative components are rejected.
    /// assert!(TimeOfDay::new(21, -30, 5, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        hour: i32,
        minute: i32,
        second: i32,
        millisecond: i32,
    ) -> Result<TimeOfDay, Error> {
        let components = [
            ("hour", hour),
            ("minute", minute),
            ("second", second),
            ("millisecond", millisecond),
        ];
        for (what, given) in components {
            if given < 0 {
                return Err(Error::from(E::NegativeComponent {
                    what,
                    given: i64::from(given),
                }));
            }
        }
        let total = i64::from(hour) * t::MILLIS_PER_HOUR
            + i64::from(minute) * t::MILLIS_PER_MINUTE
            + i64::from(second) * t::MILLIS_PER_SECOND
            + i64::from(millisecond);
        if total >= t::MILLIS_PER_CIVIL_DAY {
            trace!(
                "total of {total}ms from components \
                 {hour}h {minute}m {second}s {millisecond}ms \
                 exceeds one day, wrapping around midnight",
            );
        }
        Ok(TimeOfDay::from_millisecond_wrapping(total))
    }

    /// Creates a new `TimeOfDay` value in a `const` context.
    ///
    /// Unlike [`TimeOfDay::new`], every component must be within its natural
    /// range.
    ///
    /// # Panics
    ///
    /// This panics unless all of the following conditions are true:
    ///
    /// * `0 <= hour <= 23`
    /// * `0 <= minute <= 59`
    /// * `0 <= second <= 59`
    /// * `0 <= millisecond <= 999`
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// const BEDTIME: TimeOfDay = TimeOfDay::constant(21, 30, 5, 123);
    /// assert_eq!(BEDTIME.hour(), 21);
    /// assert_eq!(BEDTIME.minute(), 30);
    /// assert_eq!(BEDTIME.second(), 5);
    /// assert_eq!(BEDTIME.millisecond(), 123);
    /// ```
    #[inline]
    pub const fn constant(
        hour: i8,
        minute: i8,
        second: i8,
        millisecond: i16,
    ) -> TimeOfDay {
        if hour < 0 || hour > 23 {
            panic!("invalid hour");
        }
        if minute < 0 || minute > 59 {
            panic!("invalid minute");
        }
        if second < 0 || second > 59 {
            panic!("invalid second");
        }
        if millisecond < 0 || millisecond > 999 {
            panic!("invalid millisecond");
        }
        let total = (hour as i64) * t::MILLIS_PER_HOUR
            + (minute as i64) * t::MILLIS_PER_MINUTE
            + (second as i64) * t::MILLIS_PER_SECOND
            + (millisecond as i64);
        TimeOfDay { millisecond: total as i32 }
    }

    /// Returns the first moment of a day.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::midnight();
    /// assert_eq!(t.as_millisecond(), 0);
    /// assert_eq!(t.to_string(), "00:00");
    /// ```
    #[inline]
    pub const fn midnight() -> TimeOfDay {
        TimeOfDay { millisecond: 0 }
    }

    /// Returns the last millisecond of a day, `23:59:59.999`.
    ///
    /// This is the same as [`TimeOfDay::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::max_value().as_millisecond(), 86_399_999);
    /// ```
    #[inline]
    pub const fn max_value() -> TimeOfDay {
        TimeOfDay::MAX
    }

    /// Creates a `TimeOfDay` from a number of 100 nanosecond ticks.
    ///
    /// There are 10,000 ticks in a millisecond. Sub-millisecond ticks are
    /// truncated. A tick count that doesn't fall within a single day wraps
    /// around midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::from_ticks(36_000_000_000);
    /// assert_eq!(t, TimeOfDay::constant(1, 0, 0, 0));
    ///
    /// let t = TimeOfDay::from_ticks(19_999);
    /// assert_eq!(t.as_millisecond(), 1);
    /// ```
    pub fn from_ticks(ticks: i64) -> TimeOfDay {
        let millisecond = ticks / t::TICKS_PER_MILLISECOND;
        if !(0..t::MILLIS_PER_CIVIL_DAY).contains(&millisecond) {
            trace!(
                "tick count {ticks} describes {millisecond}ms, \
                 which is outside a single day, wrapping around midnight",
            );
        }
        TimeOfDay::from_millisecond_wrapping(millisecond)
    }

    /// Creates a `TimeOfDay` from a duration since midnight expressed in
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// This returns an error if the duration is negative or if it is one day
    /// or longer.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::from_time_span(3_600_000)?;
    /// assert_eq!(t, TimeOfDay::constant(1, 0, 0, 0));
    ///
    /// assert!(TimeOfDay::from_time_span(-1).is_err());
    /// assert!(TimeOfDay::from_time_span(86_400_000).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_time_span(milliseconds: i64) -> Result<TimeOfDay, Error> {
        if !(0..t::MILLIS_PER_CIVIL_DAY).contains(&milliseconds) {
            return Err(Error::from(E::Unrepresentable {
                given: i128::from(milliseconds),
            }));
        }
        Ok(TimeOfDay::from_millisecond_wrapping(milliseconds))
    }

    /// Creates a `TimeOfDay` from the clock fields of an external date and
    /// time value.
    ///
    /// When the source's [`DateKind`](crate::civil::DateKind) is `Utc`, its
    /// UTC fields are used. Otherwise, its local fields are used. The fields
    /// are then given to [`TimeOfDay::new`].
    ///
    /// # Errors
    ///
    /// This returns an error if any of the selected fields are negative.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::{ClockFields, DateKind, SourceTime, TimeOfDay};
    ///
    /// struct Stamp;
    ///
    /// impl SourceTime for Stamp {
    ///     fn kind(&self) -> DateKind {
    ///         DateKind::Utc
    ///     }
    ///
    ///     fn utc_fields(&self) -> ClockFields {
    ///         ClockFields { hour: 17, minute: 45, second: 0, millisecond: 0 }
    ///     }
    ///
    ///     fn local_fields(&self) -> ClockFields {
    ///         ClockFields { hour: 19, minute: 45, second: 0, millisecond: 0 }
    ///     }
    /// }
    ///
    /// let t = TimeOfDay::from_source_time(&Stamp)?;
    /// assert_eq!(t, TimeOfDay::constant(17, 45, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_source_time<S: SourceTime + ?Sized>(
        source: &S,
    ) -> Result<TimeOfDay, Error> {
        let fields = source.clock_fields();
        TimeOfDay::new(
            fields.hour,
            fields.minute,
            fields.second,
            fields.millisecond,
        )
    }

    /// Returns the current time of day in UTC according to the system clock.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let now = TimeOfDay::now_utc();
    /// assert!(now <= TimeOfDay::MAX);
    /// ```
    #[cfg(feature = "std")]
    pub fn now_utc() -> TimeOfDay {
        let millisecond = crate::civil::source::system_time_millisecond_of_day(
            std::time::SystemTime::now(),
        );
        TimeOfDay::from_millisecond_wrapping(millisecond)
    }

    /// Returns the "hour" component of this time.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(13, 35, 56, 123);
    /// assert_eq!(t.hour(), 13);
    /// ```
    #[inline]
    pub fn hour(self) -> i8 {
        (i64::from(self.millisecond) / t::MILLIS_PER_HOUR) as i8
    }

    /// Returns the "minute" component of this time.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(13, 35, 56, 123);
    /// assert_eq!(t.minute(), 35);
    /// ```
    #[inline]
    pub fn minute(self) -> i8 {
        let millisecond = i64::from(self.millisecond);
        ((millisecond % t::MILLIS_PER_HOUR) / t::MILLIS_PER_MINUTE) as i8
    }

    /// Returns the "second" component of this time.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(13, 35, 56, 123);
    /// assert_eq!(t.second(), 56);
    /// ```
    #[inline]
    pub fn second(self) -> i8 {
        let millisecond = i64::from(self.millisecond);
        ((millisecond % t::MILLIS_PER_MINUTE) / t::MILLIS_PER_SECOND) as i8
    }

    /// Returns the "millisecond" component of this time.
    ///
    /// This is the fractional part of the current second and is always in
    /// the range `0..=999`. To get the total number of milliseconds since
    /// midnight, use [`TimeOfDay::as_millisecond`].
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(13, 35, 56, 123);
    /// assert_eq!(t.millisecond(), 123);
    /// ```
    #[inline]
    pub fn millisecond(self) -> i16 {
        (i64::from(self.millisecond) % t::MILLIS_PER_SECOND) as i16
    }

    /// Returns the total number of milliseconds since midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(1, 0, 0, 5);
    /// assert_eq!(t.as_millisecond(), 3_600_005);
    /// ```
    #[inline]
    pub fn as_millisecond(self) -> i32 {
        self.millisecond
    }

    /// Returns the total number of 100 nanosecond ticks since midnight.
    ///
    /// This is the inverse of [`TimeOfDay::from_ticks`].
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(1, 0, 0, 0);
    /// assert_eq!(t.to_ticks(), 36_000_000_000);
    /// ```
    #[inline]
    pub fn to_ticks(self) -> i64 {
        i64::from(self.millisecond) * t::TICKS_PER_MILLISECOND
    }

    /// Add the given number of milliseconds to this time, wrapping around
    /// midnight.
    ///
    /// The number of milliseconds may be negative, in which case, the time
    /// moves backwards. This never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(23, 0, 0, 0);
    /// assert_eq!(t.wrapping_add(7_200_000), TimeOfDay::constant(1, 0, 0, 0));
    ///
    /// let t = TimeOfDay::midnight();
    /// assert_eq!(t.wrapping_add(-1), TimeOfDay::MAX);
    /// ```
    #[inline]
    pub fn wrapping_add(self, milliseconds: i64) -> TimeOfDay {
        let sum = i64::from(self.millisecond)
            + milliseconds.rem_euclid(t::MILLIS_PER_CIVIL_DAY);
        TimeOfDay::from_millisecond_wrapping(sum)
    }

    /// Add the given number of milliseconds to this time, wrapping around
    /// midnight and returning the number of days the result wrapped across.
    ///
    /// The number of days is negative when the time moved backwards past
    /// midnight. Whole days in `milliseconds` always count towards it,
    /// even when the resulting time is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(23, 30, 0, 0);
    /// let (t2, days) = t.overflowing_add(5 * 3_600_000);
    /// assert_eq!(t2, TimeOfDay::constant(4, 30, 0, 0));
    /// assert_eq!(days, 1);
    ///
    /// let (t2, days) = TimeOfDay::midnight().overflowing_add(-1);
    /// assert_eq!(t2, TimeOfDay::MAX);
    /// assert_eq!(days, -1);
    ///
    /// let (t2, days) = t.overflowing_add(-2 * 86_400_000);
    /// assert_eq!(t2, t);
    /// assert_eq!(days, -2);
    /// ```
    pub fn overflowing_add(self, milliseconds: i64) -> (TimeOfDay, i64) {
        let mut days = milliseconds / t::MILLIS_PER_CIVIL_DAY;
        let mut millisecond = i64::from(self.millisecond)
            + milliseconds % t::MILLIS_PER_CIVIL_DAY;
        if millisecond < 0 {
            days -= 1;
            millisecond += t::MILLIS_PER_CIVIL_DAY;
        } else if millisecond >= t::MILLIS_PER_CIVIL_DAY {
            days += 1;
            millisecond -= t::MILLIS_PER_CIVIL_DAY;
        }
        (TimeOfDay::from_millisecond_wrapping(millisecond), days)
    }

    /// Add the given number of hours to this time, wrapping around midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(22, 15, 0, 0);
    /// assert_eq!(t.add_hours(3), TimeOfDay::constant(1, 15, 0, 0));
    /// assert_eq!(t.add_hours(-23), TimeOfDay::constant(23, 15, 0, 0));
    /// ```
    #[inline]
    pub fn add_hours(self, hours: i64) -> TimeOfDay {
        let hours = hours.rem_euclid(t::HOURS_PER_CIVIL_DAY);
        self.wrapping_add(hours * t::MILLIS_PER_HOUR)
    }

    /// Add the given number of minutes to this time, wrapping around
    /// midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(23, 45, 0, 0);
    /// assert_eq!(t.add_minutes(30), TimeOfDay::constant(0, 15, 0, 0));
    /// assert_eq!(t.add_minutes(-45), TimeOfDay::constant(23, 0, 0, 0));
    /// ```
    #[inline]
    pub fn add_minutes(self, minutes: i64) -> TimeOfDay {
        let minutes = minutes.rem_euclid(t::MINUTES_PER_CIVIL_DAY);
        self.wrapping_add(minutes * t::MILLIS_PER_MINUTE)
    }

    /// Subtract the given number of milliseconds from this time, wrapping
    /// around midnight.
    ///
    /// This is equivalent to adding the negation of `milliseconds`, except
    /// that it can't overflow when `milliseconds` is `i64::MIN`.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::constant(0, 30, 0, 0);
    /// assert_eq!(t.wrapping_sub(3_600_000), TimeOfDay::constant(23, 30, 0, 0));
    /// ```
    #[inline]
    pub fn wrapping_sub(self, milliseconds: i64) -> TimeOfDay {
        let milliseconds = milliseconds.rem_euclid(t::MILLIS_PER_CIVIL_DAY);
        self.wrapping_add(-milliseconds)
    }

    /// Returns true if this time is within the half-open window
    /// `[start, end)` on a 24-hour clock.
    ///
    /// When `start > end`, the window is taken to span midnight. That is,
    /// this returns true when this time is at or after `start` or when it is
    /// before `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let open = TimeOfDay::constant(9, 0, 0, 0);
    /// let close = TimeOfDay::constant(17, 0, 0, 0);
    /// assert!(TimeOfDay::constant(9, 0, 0, 0).is_between(open, close));
    /// assert!(!TimeOfDay::constant(17, 0, 0, 0).is_between(open, close));
    ///
    /// // A window spanning midnight.
    /// let start = TimeOfDay::constant(22, 0, 0, 0);
    /// let end = TimeOfDay::constant(2, 0, 0, 0);
    /// assert!(TimeOfDay::constant(23, 30, 0, 0).is_between(start, end));
    /// assert!(TimeOfDay::constant(1, 0, 0, 0).is_between(start, end));
    /// assert!(!TimeOfDay::constant(12, 0, 0, 0).is_between(start, end));
    /// ```
    #[inline]
    pub fn is_between(self, start: TimeOfDay, end: TimeOfDay) -> bool {
        if start <= end {
            start <= self && self < end
        } else {
            start <= self || self < end
        }
    }

    /// Formats this time using the given format token.
    ///
    /// The supported tokens are `t`, `T`, `r`, `R`, `o` and `O`. See
    /// [`Format`] for what each one produces.
    ///
    /// # Errors
    ///
    /// This returns an error if the token isn't supported. Custom format
    /// patterns are not supported.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::MAX;
    /// assert_eq!(t.format("t")?, "23:59");
    /// assert_eq!(t.format("R")?, "23:59:59");
    /// assert_eq!(t.format("O")?, "23:59:59.9990000");
    /// assert!(t.format("HH:mm").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn format(self, token: &str) -> Result<String, Error> {
        let format = Format::from_token(token)?;
        Ok(self.display(format).to_string())
    }

    /// Returns a value that formats this time with the given format when
    /// displayed.
    ///
    /// Unlike [`TimeOfDay::format`], this never fails and doesn't allocate.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::{civil::TimeOfDay, fmt::Format};
    ///
    /// let t = TimeOfDay::constant(7, 8, 9, 10);
    /// assert_eq!(t.display(Format::RoundTrip).to_string(), "07:08:09.0100000");
    /// ```
    #[inline]
    pub fn display(self, format: Format) -> fmt::Display {
        fmt::Display::new(self, format)
    }

    /// Parses a time of day from the given string.
    ///
    /// The accepted forms are `HH:mm`, `HH:mm:ss` and `HH:mm:ss.fraction`.
    /// The hour must be in the range `0..=23` and the minute and second must
    /// be in the range `0..=59`. Each may be written with one or two digits.
    /// The fraction may have any number of digits, but only the first three
    /// are significant since a `TimeOfDay` has millisecond precision. Any
    /// additional precision is truncated. Whitespace is permitted at the
    /// beginning and end of the string and around the `:` separators.
    ///
    /// This is also available via the `FromStr` trait implementation.
    ///
    /// # Errors
    ///
    /// This returns an error if the string isn't in one of the forms above.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("9:5:3.1")?;
    /// assert_eq!(t, TimeOfDay::constant(9, 5, 3, 100));
    ///
    /// let t = TimeOfDay::parse(" 23 : 59 : 59.9999999 ")?;
    /// assert_eq!(t, TimeOfDay::MAX);
    ///
    /// let t: TimeOfDay = "12:30".parse()?;
    /// assert_eq!(t, TimeOfDay::constant(12, 30, 0, 0));
    ///
    /// assert!(TimeOfDay::parse("24:00").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(text: &str) -> Result<TimeOfDay, Error> {
        static P: TimeOfDayParser = TimeOfDayParser::new();
        P.parse(text)
    }

    /// Parses a time of day from the given string, returning `None` if it
    /// isn't valid.
    ///
    /// This accepts precisely the same inputs as [`TimeOfDay::parse`], but
    /// discards the reason for any failure.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::try_parse("06:00"), Some(TimeOfDay::constant(6, 0, 0, 0)));
    /// assert_eq!(TimeOfDay::try_parse("not a time"), None);
    /// ```
    pub fn try_parse(text: &str) -> Option<TimeOfDay> {
        match TimeOfDay::parse(text) {
            Ok(time) => Some(time),
            Err(_err) => {
                debug!("discarding error from parsing {text:?}: {_err}");
                None
            }
        }
    }
}

/// Internal APIs.
impl TimeOfDay {
    /// Converts any number of milliseconds to a time of day by wrapping it
    /// into the range of a single day.
    #[inline]
    pub(crate) fn from_millisecond_wrapping(millisecond: i64) -> TimeOfDay {
        let millisecond = millisecond.rem_euclid(t::MILLIS_PER_CIVIL_DAY);
        // OK because the remainder is always in `0..86_400_000`, which fits
        // into an `i32`.
        TimeOfDay { millisecond: millisecond as i32 }
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.display(Format::default()), f)
    }
}

impl core::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond(),
        )
    }
}

impl core::str::FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(text: &str) -> Result<TimeOfDay, Error> {
        TimeOfDay::parse(text)
    }
}

/// Computes the time of day that is the given time of day taken as elapsed
/// milliseconds before `self`. This uses wrapping arithmetic.
///
/// For example, `01:00 - 23:00` is `02:00`.
impl Sub for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn sub(self, rhs: TimeOfDay) -> TimeOfDay {
        self.wrapping_sub(i64::from(rhs.as_millisecond()))
    }
}

/// Adds a duration. This uses wrapping arithmetic.
///
/// Any precision finer than milliseconds in the duration is truncated.
impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn add(self, rhs: Duration) -> TimeOfDay {
        self.wrapping_add(duration_millisecond_of_day(rhs))
    }
}

/// Adds a duration in place. This uses wrapping arithmetic.
impl AddAssign<Duration> for TimeOfDay {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.add(rhs);
    }
}

/// Subtracts a duration. This uses wrapping arithmetic.
///
/// Any precision finer than milliseconds in the duration is truncated.
impl Sub<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn sub(self, rhs: Duration) -> TimeOfDay {
        self.wrapping_sub(duration_millisecond_of_day(rhs))
    }
}

/// Subtracts a duration in place. This uses wrapping arithmetic.
impl SubAssign<Duration> for TimeOfDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.sub(rhs);
    }
}

/// Converts a time of day to the duration elapsed since midnight.
impl From<TimeOfDay> for Duration {
    fn from(time: TimeOfDay) -> Duration {
        // OK because a time of day is never negative.
        Duration::from_millis(time.as_millisecond() as u64)
    }
}

/// Converts a duration since midnight to a time of day.
///
/// Any precision finer than milliseconds is truncated. This fails when the
/// duration is one day or longer.
impl TryFrom<Duration> for TimeOfDay {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<TimeOfDay, Error> {
        let millis = duration.as_millis();
        match i64::try_from(millis) {
            Ok(millis) if millis < t::MILLIS_PER_CIVIL_DAY => {
                TimeOfDay::from_time_span(millis)
            }
            _ => Err(Error::from(E::Unrepresentable {
                given: i128::try_from(millis).unwrap_or(i128::MAX),
            })),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.display(Format::RoundTrip))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeOfDay, D::Error> {
        use serde::de;

        struct TimeOfDayVisitor;

        impl<'de> de::Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time of day string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<TimeOfDay, E> {
                let text =
                    core::str::from_utf8(value).map_err(de::Error::custom)?;
                self.visit_str(text)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<TimeOfDay, E> {
                TimeOfDay::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeOfDay {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeOfDay {
        TimeOfDay::from_millisecond_wrapping(i64::from(u32::arbitrary(g)))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimeOfDay>> {
        alloc::boxed::Box::new(self.millisecond.shrink().map(|millisecond| {
            TimeOfDay::from_millisecond_wrapping(i64::from(millisecond))
        }))
    }
}

/// Reduces a duration to whole milliseconds modulo one day.
fn duration_millisecond_of_day(duration: Duration) -> i64 {
    let seconds = duration.as_secs() % (t::SECONDS_PER_CIVIL_DAY as u64);
    // OK because the remainder is always less than one day.
    (seconds as i64) * t::MILLIS_PER_SECOND
        + i64::from(duration.subsec_millis())
}
