/*!
Facilities for dealing with times of day.

The main type in this module is [`TimeOfDay`], which represents a time on a
24-hour clock with millisecond precision. It has no date and no time zone.

A `TimeOfDay` can be obtained in a number of ways:

* From its components via [`TimeOfDay::new`] or [`TimeOfDay::constant`].
* From a number of 100 nanosecond ticks via [`TimeOfDay::from_ticks`].
* From a duration since midnight via [`TimeOfDay::from_time_span`] or the
`TryFrom<core::time::Duration>` trait implementation.
* From the clock fields of some other date and time value via
[`TimeOfDay::from_source_time`]. Any type can act as a source by implementing
the [`SourceTime`] trait.
* By parsing a string via [`TimeOfDay::parse`].

# Example

```
use timeofday::civil::TimeOfDay;

let start = TimeOfDay::parse("22:30")?;
let end = start.add_hours(3);
assert_eq!(end.to_string(), "01:30");

let midnight = TimeOfDay::midnight();
assert!(midnight.is_between(start, end));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    source::{ClockFields, DateKind, SourceTime},
    time::TimeOfDay,
};

mod source;
mod time;
