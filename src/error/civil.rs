use crate::{error, util::t};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NegativeComponent { what: &'static str, given: i64 },
    Unrepresentable { given: i128 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            NegativeComponent { what, given } => write!(
                f,
                "parameter '{what}' with value {given} \
                 must not be negative",
            ),
            Unrepresentable { given } => write!(
                f,
                "duration of {given} milliseconds describes an \
                 unrepresentable time of day (it must be in the \
                 range 0..{max})",
                max = t::MILLIS_PER_CIVIL_DAY,
            ),
        }
    }
}
