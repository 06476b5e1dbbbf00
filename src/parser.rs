//! The parser facade: owns the configuration and hands lines to the grammar.

use crate::rfc5424;
use crate::{Message, ParseError};

/// Options accepted by [`Parser`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Also accept lines where STRUCTURED-DATA is left out entirely
    /// instead of being written as `-`. Lines that match the strict
    /// grammar are always parsed strictly.
    pub allow_missing_structured_data: bool,
}

/// Parses single syslog lines into [`Message`]s.
///
/// A `Parser` holds no state besides its configuration, so one instance
/// can be shared freely between threads.
///
/// # Example
///
/// ```
/// use syslog5424::Parser;
///
/// let parser = Parser::new().allow_missing_structured_data(true);
/// let message = parser
///     .parse("<40>1 2012-11-30T06:45:29+00:00 host app web.3 - State changed from starting to up")
///     .unwrap();
///
/// assert_eq!(message.procid, Some("web.3"));
/// assert_eq!(message.structured_data, None);
/// assert_eq!(message.msg, Some("State changed from starting to up"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Parser { config }
    }

    pub fn allow_missing_structured_data(mut self, allow: bool) -> Self {
        self.config.allow_missing_structured_data = allow;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one line, without its trailing newline.
    ///
    /// Either the whole line matches and a `Message` borrowing from it is
    /// returned, or a `ParseError` is; there is no partial result.
    pub fn parse<'a>(&self, line: &'a str) -> Result<Message<'a>, ParseError> {
        let result = rfc5424::parse(line, self.config.allow_missing_structured_data);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::trace!(
                production = err.production(),
                line = err.line(),
                column = err.column(),
                cause = ?std::error::Error::source(err).map(ToString::to_string),
                "rejected syslog line"
            );
        }

        result
    }
}

impl From<ParserConfig> for Parser {
    fn from(config: ParserConfig) -> Self {
        Parser::with_config(config)
    }
}
