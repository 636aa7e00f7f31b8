/*!
A time of day value type with millisecond precision.

The central type of this crate is [`civil::TimeOfDay`]. It is a point on a
24-hour clock, from `00:00:00.000` to `23:59:59.999`, without any date or
time zone attached to it. All days are assumed to be exactly 24 hours long.

Arithmetic on a `TimeOfDay` always wraps around midnight. Adding two hours
to `23:00` gives `01:00`, and asking whether `01:00` is between `22:00` and
`02:00` gives `true`.

# Example

```
use timeofday::civil::TimeOfDay;

let t = TimeOfDay::parse("21:45:30.25")?;
assert_eq!(t.hour(), 21);
assert_eq!(t.minute(), 45);
assert_eq!(t.second(), 30);
assert_eq!(t.millisecond(), 250);

let later = t.add_hours(4);
assert_eq!(later.to_string(), "01:45");
assert_eq!(later.format("T")?, "01:45:30");

let (_, days) = t.overflowing_add(4 * 3_600_000);
assert_eq!(days, 1);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Every fallible operation returns the same [`Error`] type. It supports a
small number of predicates, like [`Error::is_parse`], for distinguishing
between the broad kinds of failure.

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error`, `std::time::SystemTime` implements
[`civil::SourceTime`] and `TimeOfDay::now_utc` is available. When
disabled, this crate is `no_std` but still requires `alloc`.
* **logging** - When enabled, the `log` crate is used to emit messages
where appropriate. For example, when a value is wrapped into the range of a
single day or when a parse error is discarded by
[`civil::TimeOfDay::try_parse`].
* **serde** - When enabled, [`civil::TimeOfDay`] implements Serde's
`Serialize` and `Deserialize` traits. See the [`fmt`] module for details.
* **perf-inline** (enabled by default) - When enabled, a few small routines
are annotated with `inline(always)`.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry the input that failed to parse, which requires the heap.
extern crate alloc;

pub use crate::error::Error;

#[macro_use]
mod logging;

pub mod civil;
mod error;
pub mod fmt;
mod util;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::civil::TimeOfDay;

    #[test]
    fn sanity() {
        let _ = env_logger::try_init();

        let t = TimeOfDay::parse("23:30").unwrap();
        assert_eq!(t.add_minutes(45).to_string(), "00:15");
    }
}
