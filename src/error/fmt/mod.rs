use alloc::boxed::Box;

use crate::error;

pub(crate) use self::parse::ParseError;

mod parse;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ParseFailure { input: Box<str> },
    UnsupportedFormat { token: Box<str> },
}

impl Error {
    #[cold]
    #[inline(never)]
    pub(crate) fn parse_failure(input: &str) -> Error {
        Error::ParseFailure { input: input.into() }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn unsupported_format(token: &str) -> Error {
        Error::UnsupportedFormat { token: token.into() }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ParseFailure { ref input } => write!(
                f,
                "string {input:?} was not recognized as a valid time of day",
            ),
            UnsupportedFormat { ref token } => write!(
                f,
                "format {token:?} is not supported \
                 (custom formats are not supported, \
                 expected one of `t`, `T`, `r`, `R`, `o` or `O`)",
            ),
        }
    }
}
