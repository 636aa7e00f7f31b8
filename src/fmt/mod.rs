/*!
Support for printing and parsing times of day.

Printing is done with one of a small set of standard format tokens,
represented by [`Format`]. Custom format patterns are not supported. Each
format token corresponds to a fixed layout:

| Token | Format | Example |
| ----- | ------ | ------- |
| `t` | [`Format::ShortTime`] | `09:05` |
| `T` | [`Format::LongTime`] | `09:05:03` |
| `r` or `R` | [`Format::Rfc1123`] | `09:05:03` |
| `o` or `O` | [`Format::RoundTrip`] | `09:05:03.1000000` |

The round trip format always prints seven fractional second digits, but
since a [`TimeOfDay`] has millisecond precision, the last four are always
zero.

Parsing is done with [`TimeOfDay::parse`] (or the `FromStr` trait
implementation on `TimeOfDay`). Output in any of the formats above can be
parsed. Only the round trip format is guaranteed to parse back to the exact
time of day that was printed.

# Example

```
use timeofday::{civil::TimeOfDay, fmt::Format};

let t = TimeOfDay::constant(9, 5, 3, 100);

let format: Format = "o".parse()?;
let printed = t.display(format).to_string();
assert_eq!(printed, "09:05:03.1000000");
assert_eq!(TimeOfDay::parse(&printed)?, t);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Serde

When the `serde` feature is enabled, `TimeOfDay` implements `Serialize` and
`Deserialize`. It is serialized as a string in the round trip format and
deserialized with [`TimeOfDay::parse`].
*/

use crate::{
    civil::TimeOfDay,
    error::{fmt::Error as E, Error},
};

pub(crate) use self::{parser::TimeOfDayParser, printer::TimeOfDayPrinter};

mod parser;
mod printer;
mod util;

/// A standard format for printing a [`TimeOfDay`].
///
/// A format is usually obtained from its single character token via
/// [`Format::from_token`] or the `FromStr` trait implementation.
///
/// The default format is [`Format::ShortTime`]. It is used by the `Display`
/// implementation of `TimeOfDay`.
///
/// # Example
///
/// ```
/// use timeofday::{civil::TimeOfDay, fmt::Format};
///
/// let t = TimeOfDay::constant(23, 0, 5, 0);
/// assert_eq!(t.display(Format::ShortTime).to_string(), "23:00");
/// assert_eq!(t.display(Format::LongTime).to_string(), "23:00:05");
/// assert_eq!(t.display(Format::Rfc1123).to_string(), "23:00:05");
/// assert_eq!(t.display(Format::RoundTrip).to_string(), "23:00:05.0000000");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Format {
    /// The `t` token. Prints `HH:mm`.
    #[default]
    ShortTime,
    /// The `T` token. Prints `HH:mm:ss`.
    LongTime,
    /// The `r` or `R` token. Prints `HH:mm:ss`.
    Rfc1123,
    /// The `o` or `O` token. Prints `HH:mm:ss.fffffff`.
    RoundTrip,
}

impl Format {
    /// Returns the format corresponding to the given token.
    ///
    /// # Errors
    ///
    /// This returns an error for anything other than `t`, `T`, `r`, `R`, `o`
    /// or `O`.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::fmt::Format;
    ///
    /// assert_eq!(Format::from_token("R")?, Format::Rfc1123);
    /// assert_eq!(Format::from_token("o")?, Format::RoundTrip);
    ///
    /// let err = Format::from_token("HH:mm").unwrap_err();
    /// assert!(err.is_unsupported_format());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_token(token: &str) -> Result<Format, Error> {
        let format = match token {
            "t" => Format::ShortTime,
            "T" => Format::LongTime,
            "r" | "R" => Format::Rfc1123,
            "o" | "O" => Format::RoundTrip,
            _ => return Err(Error::from(E::unsupported_format(token))),
        };
        Ok(format)
    }

    /// Returns the canonical token for this format.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::fmt::Format;
    ///
    /// assert_eq!(Format::LongTime.token(), "T");
    /// assert_eq!(Format::RoundTrip.token(), "o");
    /// ```
    pub fn token(self) -> &'static str {
        match self {
            Format::ShortTime => "t",
            Format::LongTime => "T",
            Format::Rfc1123 => "r",
            Format::RoundTrip => "o",
        }
    }
}

impl core::str::FromStr for Format {
    type Err = Error;

    fn from_str(token: &str) -> Result<Format, Error> {
        Format::from_token(token)
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.token())
    }
}

/// A time of day paired with the format to display it with.
///
/// This is returned by [`TimeOfDay::display`]. Its `Display` implementation
/// writes directly to the formatter without allocating.
#[derive(Clone, Copy, Debug)]
pub struct Display {
    time: TimeOfDay,
    format: Format,
}

impl Display {
    pub(crate) fn new(time: TimeOfDay, format: Format) -> Display {
        Display { time, format }
    }
}

impl core::fmt::Display for Display {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        TimeOfDayPrinter::new().format(self.format).print(self.time, f)
    }
}

/// The result of parsing a value out of a slice of text.
///
/// `input` is whatever remains after `value` was parsed.
#[derive(Clone, Debug)]
pub(crate) struct Parsed<'i, V> {
    pub(crate) value: V,
    pub(crate) input: &'i str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        for token in ["t", "T", "r", "R", "o", "O"] {
            let format: Format = token.parse().unwrap();
            assert!(token.eq_ignore_ascii_case(format.token()), "{token}");
        }
        assert_eq!(Format::from_token("r").unwrap(), Format::Rfc1123);
        assert_eq!(Format::from_token("O").unwrap(), Format::RoundTrip);
        assert_eq!(Format::default(), Format::ShortTime);
    }

    #[test]
    fn unsupported_tokens() {
        for token in ["", "s", "u", "tt", "HH:mm", " t", "o "] {
            let err = Format::from_token(token).unwrap_err();
            assert!(err.is_unsupported_format(), "{token:?}");
        }
        insta::assert_snapshot!(
            Format::from_token("HH:mm").unwrap_err(),
            @r#"format "HH:mm" is not supported (custom formats are not supported, expected one of `t`, `T`, `r`, `R`, `o` or `O`)"#,
        );
    }
}
