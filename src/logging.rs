// Without the `logging` feature, these macros expand to nothing and their
// arguments are never evaluated.

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    use crate::civil::TimeOfDay;

    // Drives every call site with a logger that accepts all levels, so that
    // the format arguments of each message are evaluated.
    #[test]
    fn call_sites() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();

        // `trace!` in `TimeOfDay::new`.
        let t = TimeOfDay::new(24, 0, 0, 1).unwrap();
        assert_eq!(t.as_millisecond(), 1);
        // `trace!` in `TimeOfDay::from_ticks`.
        assert_eq!(TimeOfDay::from_ticks(-10_000), TimeOfDay::MAX);
        // `trace!` when a fraction is truncated.
        let t = TimeOfDay::parse("00:00:00.12345").unwrap();
        assert_eq!(t.millisecond(), 123);
        // `debug!` in `TimeOfDay::try_parse`.
        assert_eq!(TimeOfDay::try_parse("nope"), None);
    }
}
