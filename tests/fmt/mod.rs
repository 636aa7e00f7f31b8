mod format;
mod parse;
#[cfg(feature = "serde")]
mod serialization;
