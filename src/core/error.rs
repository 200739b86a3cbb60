//! Error types for the formatter

/// Error returned when a severity level cannot be parsed from a string.
///
/// Formatting itself never fails; parsing a [`Level`](super::level::Level)
/// from configuration input is the one fallible operation this crate exposes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level: '{input}'")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        ParseLevelError {
            input: input.into(),
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
