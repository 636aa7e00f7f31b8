#[cfg(feature = "std")]
use crate::util::t;

/// Describes which clock the fields of a [`SourceTime`] are read from.
///
/// When a [`TimeOfDay`](crate::civil::TimeOfDay) is created from a source
/// time, only `Utc` selects the source's UTC fields. Both `Local` and
/// `Unspecified` select its local fields.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DateKind {
    /// The source doesn't say whether it is in UTC or local time.
    #[default]
    Unspecified,
    /// The source is in UTC.
    Utc,
    /// The source is in the local time zone of the system.
    Local,
}

/// The time of day fields of a date and time value, as read from one of its
/// clocks.
///
/// These are given as-is to [`TimeOfDay::new`](crate::civil::TimeOfDay::new).
/// In particular, they are not required to be within their natural ranges,
/// but they must not be negative.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClockFields {
    /// The hour, usually in the range `0..=23`.
    pub hour: i32,
    /// The minute, usually in the range `0..=59`.
    pub minute: i32,
    /// The second, usually in the range `0..=59`.
    pub second: i32,
    /// The millisecond, usually in the range `0..=999`.
    pub millisecond: i32,
}

/// A trait for date and time values that a
/// [`TimeOfDay`](crate::civil::TimeOfDay) can be extracted from.
///
/// A source has both UTC and local clock fields, along with a [`DateKind`]
/// saying which of the two it should be read from.
///
/// When the `std` feature is enabled, this is implemented for
/// `std::time::SystemTime`. Since this crate doesn't know about time zones,
/// a `SystemTime` reports its kind as `Utc` and its local fields are the same
/// as its UTC fields.
///
/// # Example
///
/// ```
/// use timeofday::civil::{ClockFields, DateKind, SourceTime, TimeOfDay};
///
/// /// A wall clock reading that is two hours ahead of UTC.
/// struct Reading {
///     utc: ClockFields,
/// }
///
/// impl SourceTime for Reading {
///     fn kind(&self) -> DateKind {
///         DateKind::Local
///     }
///
///     fn utc_fields(&self) -> ClockFields {
///         self.utc
///     }
///
///     fn local_fields(&self) -> ClockFields {
///         ClockFields { hour: (self.utc.hour + 2) % 24, ..self.utc }
///     }
/// }
///
/// let reading = Reading {
///     utc: ClockFields { hour: 23, minute: 15, second: 0, millisecond: 0 },
/// };
/// let t = TimeOfDay::from_source_time(&reading)?;
/// assert_eq!(t, TimeOfDay::constant(1, 15, 0, 0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SourceTime {
    /// Returns which clock this value should be read from.
    fn kind(&self) -> DateKind;

    /// Returns the fields of this value as seen on a UTC clock.
    fn utc_fields(&self) -> ClockFields;

    /// Returns the fields of this value as seen on a local clock.
    fn local_fields(&self) -> ClockFields;

    /// Returns the fields selected by this value's kind.
    ///
    /// This returns the UTC fields when the kind is [`DateKind::Utc`] and
    /// the local fields otherwise.
    fn clock_fields(&self) -> ClockFields {
        match self.kind() {
            DateKind::Utc => self.utc_fields(),
            DateKind::Local | DateKind::Unspecified => self.local_fields(),
        }
    }
}

impl<'a, S: SourceTime + ?Sized> SourceTime for &'a S {
    fn kind(&self) -> DateKind {
        (**self).kind()
    }

    fn utc_fields(&self) -> ClockFields {
        (**self).utc_fields()
    }

    fn local_fields(&self) -> ClockFields {
        (**self).local_fields()
    }
}

#[cfg(feature = "std")]
impl SourceTime for std::time::SystemTime {
    fn kind(&self) -> DateKind {
        DateKind::Utc
    }

    fn utc_fields(&self) -> ClockFields {
        let millisecond = system_time_millisecond_of_day(*self);
        // OK because every component of a time of day fits into an `i32`.
        ClockFields {
            hour: (millisecond / t::MILLIS_PER_HOUR) as i32,
            minute: ((millisecond % t::MILLIS_PER_HOUR) / t::MILLIS_PER_MINUTE)
                as i32,
            second: ((millisecond % t::MILLIS_PER_MINUTE)
                / t::MILLIS_PER_SECOND) as i32,
            millisecond: (millisecond % t::MILLIS_PER_SECOND) as i32,
        }
    }

    fn local_fields(&self) -> ClockFields {
        self.utc_fields()
    }
}

/// Returns the number of milliseconds since midnight UTC for the given
/// system time.
///
/// Sub-millisecond precision is truncated towards the past, including for
/// times before the Unix epoch.
#[cfg(feature = "std")]
pub(crate) fn system_time_millisecond_of_day(
    time: std::time::SystemTime,
) -> i64 {
    let day = i128::from(t::MILLIS_PER_CIVIL_DAY);
    let millis = match time.duration_since(std::time::UNIX_EPOCH) {
        Ok(dur) => i128::try_from(dur.as_millis()).unwrap_or(i128::MAX),
        Err(err) => {
            let dur = err.duration();
            let mut millis =
                i128::try_from(dur.as_millis()).unwrap_or(i128::MAX);
            if dur.subsec_nanos() % 1_000_000 != 0 {
                millis += 1;
            }
            -millis
        }
    };
    // OK because the remainder is always in `0..86_400_000`.
    millis.rem_euclid(day) as i64
}
