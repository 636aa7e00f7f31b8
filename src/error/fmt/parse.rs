use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum ParseError {
    ExpectedColon { after: &'static str, found: Option<char> },
    ExpectedDigits { what: &'static str, found: Option<char> },
    ExpectedFractionDigits { found: Option<char> },
    OutOfRange { what: &'static str, given: i64, max: i64 },
    TrailingInput { after: &'static str, found: char },
}

impl From<ParseError> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: ParseError) -> error::Error {
        error::ErrorKind::FmtParse(err).into()
    }
}

impl error::IntoError for ParseError {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ParseError::*;

        match *self {
            ExpectedColon { after, found } => {
                write!(f, "expected `:` after {after}, but found ")?;
                core::fmt::Display::fmt(&Found(found), f)
            }
            ExpectedDigits { what, found } => {
                write!(
                    f,
                    "expected one or two digits for {what}, but found ",
                )?;
                core::fmt::Display::fmt(&Found(found), f)
            }
            ExpectedFractionDigits { found } => {
                f.write_str(
                    "expected at least one fractional second digit \
                     after `.`, but found ",
                )?;
                core::fmt::Display::fmt(&Found(found), f)
            }
            OutOfRange { what, given, max } => write!(
                f,
                "{what} {given} is not in the required range of 0..={max}",
            ),
            TrailingInput { after, found } => write!(
                f,
                "expected end of input after {after}, \
                 but found {found:?}",
            ),
        }
    }
}

/// Renders what a parser found instead of what it expected.
struct Found(Option<char>);

impl core::fmt::Display for Found {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            None => f.write_str("end of input"),
            Some(ch) => write!(f, "{ch:?}"),
        }
    }
}
