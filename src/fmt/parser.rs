use crate::{
    civil::TimeOfDay,
    error::{
        fmt::{Error as E, ParseError as P},
        Error, ErrorContext,
    },
    fmt::Parsed,
};

/// A parser for the textual form of a [`TimeOfDay`].
///
/// The grammar is:
///
/// ```text
/// TimeOfDay :::
///   Whitespace* Hour Separator Minute Seconds? Whitespace*
///
/// Seconds :::
///   Separator Second Fraction?
///
/// Separator :::
///   Whitespace* : Whitespace*
///
/// Fraction :::
///   . DecimalDigit+
/// ```
///
/// where `Hour`, `Minute` and `Second` are each one or two decimal digits.
/// `Whitespace` is the ECMAScript `\s` class: everything for which
/// [`char::is_whitespace`] returns true except U+0085 (NEXT LINE), plus
/// U+FEFF (ZERO WIDTH NO-BREAK SPACE).
#[derive(Clone, Debug)]
pub(crate) struct TimeOfDayParser {
    _priv: (),
}

impl TimeOfDayParser {
    pub(crate) const fn new() -> TimeOfDayParser {
        TimeOfDayParser { _priv: () }
    }

    pub(crate) fn parse(&self, input: &str) -> Result<TimeOfDay, Error> {
        self.parse_time_of_day(input)
            .with_context(|| E::parse_failure(input))
    }

    fn parse_time_of_day(&self, input: &str) -> Result<TimeOfDay, Error> {
        let input = trim_start(input);
        let Parsed { value: hour, input } = self.parse_hour(input)?;
        let Parsed { input, .. } = self.parse_separator(input, "hour")?;
        let Parsed { value: minute, input } = self.parse_minute(input)?;
        let Parsed { value: (second, millisecond), input } =
            self.parse_seconds(input)?;
        if let Some(found) = trim_start(input).chars().next() {
            let after = if millisecond.is_some() {
                "fractional second"
            } else if second.is_some() {
                "second"
            } else {
                "minute"
            };
            return Err(Error::from(P::TrailingInput { after, found }));
        }
        TimeOfDay::new(
            hour,
            minute,
            second.unwrap_or(0),
            millisecond.unwrap_or(0),
        )
    }

    // Hour :::
    //   DecimalDigit
    //   [0-1] DecimalDigit
    //   2 [0-3]
    fn parse_hour<'i>(
        &self,
        input: &'i str,
    ) -> Result<Parsed<'i, i32>, Error> {
        parse_component(input, "hour", 23)
    }

    // Minute :::
    //   DecimalDigit
    //   [0-5] DecimalDigit
    fn parse_minute<'i>(
        &self,
        input: &'i str,
    ) -> Result<Parsed<'i, i32>, Error> {
        parse_component(input, "minute", 59)
    }

    // Seconds :::
    //   Separator Second Fraction?
    //
    // Second :::
    //   DecimalDigit
    //   [0-5] DecimalDigit
    //
    // The seconds are optional. They are only present when the next
    // non-whitespace character is a `:`.
    fn parse_seconds<'i>(
        &self,
        input: &'i str,
    ) -> Result<Parsed<'i, (Option<i32>, Option<i32>)>, Error> {
        if !trim_start(input).starts_with(':') {
            return Ok(Parsed { value: (None, None), input });
        }
        let Parsed { input, .. } = self.parse_separator(input, "minute")?;
        let Parsed { value: second, input } =
            parse_component(input, "second", 59)?;
        let Parsed { value: millisecond, input } =
            self.parse_fraction(input)?;
        Ok(Parsed { value: (Some(second), millisecond), input })
    }

    // Fraction :::
    //   . DecimalDigit+
    //
    // Only the first three digits are significant. Fewer than three digits
    // are scaled up, e.g., `.5` is 500 milliseconds.
    fn parse_fraction<'i>(
        &self,
        input: &'i str,
    ) -> Result<Parsed<'i, Option<i32>>, Error> {
        let Some(input) = input.strip_prefix('.') else {
            return Ok(Parsed { value: None, input });
        };
        let len = input.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            let found = input.chars().next();
            return Err(Error::from(P::ExpectedFractionDigits { found }));
        }
        let (digits, input) = input.split_at(len);
        let mut millisecond = 0;
        for i in 0..3 {
            let digit = digits.as_bytes().get(i).map_or(0, |&b| b - b'0');
            millisecond = millisecond * 10 + i32::from(digit);
        }
        if len > 3 {
            trace!(
                "truncating fractional second {digits:?} to \
                 {millisecond} milliseconds",
            );
        }
        Ok(Parsed { value: Some(millisecond), input })
    }

    // Separator :::
    //   Whitespace* : Whitespace*
    fn parse_separator<'i>(
        &self,
        input: &'i str,
        after: &'static str,
    ) -> Result<Parsed<'i, ()>, Error> {
        let input = trim_start(input);
        let Some(input) = input.strip_prefix(':') else {
            let found = input.chars().next();
            return Err(Error::from(P::ExpectedColon { after, found }));
        };
        Ok(Parsed { value: (), input: trim_start(input) })
    }
}

/// Parses one or two decimal digits and checks that the value is at most
/// `max`.
///
/// Two digits are always consumed when present. When that value is out of
/// range, there is no way to parse only the first digit successfully since
/// the second digit would then be followed by neither a separator nor the
/// end of the input.
fn parse_component<'i>(
    input: &'i str,
    what: &'static str,
    max: i32,
) -> Result<Parsed<'i, i32>, Error> {
    let len = input.bytes().take(2).take_while(u8::is_ascii_digit).count();
    if len == 0 {
        let found = input.chars().next();
        return Err(Error::from(P::ExpectedDigits { what, found }));
    }
    let (digits, input) = input.split_at(len);
    let value = digits
        .bytes()
        .fold(0, |value, b| value * 10 + i32::from(b - b'0'));
    if value > max {
        return Err(Error::from(P::OutOfRange {
            what,
            given: i64::from(value),
            max: i64::from(max),
        }));
    }
    Ok(Parsed { value, input })
}

fn trim_start(input: &str) -> &str {
    input.trim_start_matches(is_whitespace)
}

fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => ch.is_whitespace(),
    }
}
