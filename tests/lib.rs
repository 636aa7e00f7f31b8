mod civil;
mod fmt;

/// A type alias we use for tests.
///
/// Most integration tests exercise several fallible operations in sequence,
/// and `?` reads better than a wall of `unwrap()`s.
type Result = std::result::Result<(), timeofday::Error>;
