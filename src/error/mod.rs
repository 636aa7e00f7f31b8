use alloc::sync::Arc;

pub(crate) mod civil;
pub(crate) mod fmt;

/// The error type for every fallible operation on a time of day.
///
/// Every error in this crate is the result of a caller handing over a value
/// that cannot be turned into a time of day. None of them are transient, so
/// retrying an operation with the same inputs will always fail in the same
/// way. Broadly, there are four categories:
///
/// * An invalid argument, such as a negative component given to
/// [`TimeOfDay::new`](crate::civil::TimeOfDay::new). See
/// [`Error::is_invalid_argument`].
/// * A duration that doesn't fit into a single day, such as one given to
/// [`TimeOfDay::from_time_span`](crate::civil::TimeOfDay::from_time_span).
/// See [`Error::is_unrepresentable`].
/// * A format token that isn't supported. See
/// [`Error::is_unsupported_format`].
/// * Text that couldn't be parsed as a time of day. See [`Error::is_parse`].
///
/// # Introspection
///
/// Beyond `Display`, `Debug` and (with the `std` feature)
/// `std::error::Error`, the only way to inspect an error is through the
/// predicates listed above. They are evaluated against the root cause of an
/// error, which is the error closest to the point where something went
/// wrong.
///
/// # Design
///
/// Only one error type exists for every fallible operation in this crate.
/// Internally, errors are structured and may be chained. For example, a
/// parse error reports both the input that failed to parse and the specific
/// reason why.
#[derive(Clone)]
pub struct Error {
    /// Shared, immutable error data. `None` only for an unknown error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone. It also makes
    /// the size of an error equal to one word.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error originated from an invalid argument.
    ///
    /// Currently, the only such argument is a negative component given to
    /// [`TimeOfDay::new`](crate::civil::TimeOfDay::new).
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(-1, 0, 0, 0).unwrap_err().is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        use self::civil::Error as CivilError;

        matches!(
            *self.root().kind(),
            ErrorKind::Civil(CivilError::NegativeComponent { .. })
        )
    }

    /// Returns true when this error originated from a duration that does
    /// not describe a time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let err = TimeOfDay::from_time_span(86_400_000).unwrap_err();
    /// assert!(err.is_unrepresentable());
    /// ```
    pub fn is_unrepresentable(&self) -> bool {
        use self::civil::Error as CivilError;

        matches!(
            *self.root().kind(),
            ErrorKind::Civil(CivilError::Unrepresentable { .. })
        )
    }

    /// Returns true when this error originated from a format token that
    /// isn't supported.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// let err = TimeOfDay::MAX.format("HH:mm").unwrap_err();
    /// assert!(err.is_unsupported_format());
    /// ```
    pub fn is_unsupported_format(&self) -> bool {
        use self::fmt::Error as FmtError;

        matches!(
            *self.root().kind(),
            ErrorKind::Fmt(FmtError::UnsupportedFormat { .. })
        )
    }

    /// Returns true when this error originated from text that could not be
    /// parsed as a time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use timeofday::civil::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse("24:00").unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::FmtParse(_))
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let Some(inner) = err.inner.as_mut() else {
            return self;
        };
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        // The consequent was constructed by the caller just now, so this is
        // the only reference to it.
        match Arc::get_mut(inner) {
            Some(inner) => inner.cause = Some(self),
            None => return self,
        }
        err
    }

    /// Follows causes until the innermost error is reached.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    /// Iterates from this error down to its root cause.
    ///
    /// The first item is always `self`, so the iterator is never empty.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    /// The kind of this link in the chain.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// What went wrong, at one level of an error chain.
#[derive(Debug)]
enum ErrorKind {
    Civil(self::civil::Error),
    Fmt(self::fmt::Error),
    FmtParse(self::fmt::ParseError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Civil(ref err) => core::fmt::Display::fmt(err, f),
            Fmt(ref err) => core::fmt::Display::fmt(err, f),
            FmtParse(ref err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown time of day error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// Conversion of the structured error enums into `Error`.
///
/// This lets `ErrorContext` accept any of them without public `From`
/// impls. Keeping the structured error types private
/// means they can evolve without breaking anyone.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// Adds a higher level error on top of the error in a `Result`.
///
/// This is the `anyhow` style of contextualizing errors without writing
/// `map_err` at every call site.
pub(crate) trait ErrorContext<T, E> {
    /// Wraps an error in `self` as the cause of `consequent`.
    ///
    /// `consequent` must not already have a cause. The chain is a linked
    /// list, so a second cause would be lost.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but only builds the consequent on failure.
    ///
    /// This is useful when creating the consequent error allocates, since
    /// the closure avoids paying that cost in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[cfg_attr(feature = "perf-inline", inline(always))]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
