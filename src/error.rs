use thiserror::Error;

/// The single error kind raised when a line does not match the grammar.
///
/// The message names the production that could not be satisfied and the
/// 1-based position where matching of that production began. The
/// furthest point the matcher reached before giving up is available
/// through [`std::error::Error::source`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Failed to match sequence ({production}) at line {line} char {column}.")]
pub struct ParseError {
    production: &'static str,
    line: usize,
    column: usize,
    #[source]
    cause: Option<Box<ParseError>>,
}

impl ParseError {
    /// Name of the grammar production that failed.
    pub fn production(&self) -> &'static str {
        self.production
    }

    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based character column of the failure.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The furthest point the matcher reached inside the failed production.
    pub fn cause(&self) -> Option<&ParseError> {
        self.cause.as_deref()
    }

    pub(crate) fn at(input: &str, mismatch: Mismatch) -> Self {
        let (line, column) = position(input, mismatch.offset);
        ParseError {
            production: mismatch.production,
            line,
            column,
            cause: None,
        }
    }

    pub(crate) fn caused_by(mut self, cause: ParseError) -> Self {
        if cause != self {
            self.cause = Some(Box::new(cause));
        }
        self
    }
}

/// Internal non-match: the production that failed and the byte offset
/// where it failed. Converted into a [`ParseError`] once, at the facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mismatch {
    pub production: &'static str,
    pub offset: usize,
}

impl Mismatch {
    pub(crate) fn new(production: &'static str, offset: usize) -> Self {
        Mismatch { production, offset }
    }
}

pub(crate) type MatchResult<T> = Result<T, Mismatch>;

// Byte offset to 1-based (line, char). Columns count chars, not bytes.
fn position(input: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &input[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count() + 1;

    (line, column)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display() {
        let err = ParseError::at("<1>1", Mismatch::new("PRI", 0));
        assert_eq!(
            err.to_string(),
            "Failed to match sequence (PRI) at line 1 char 1."
        );
        assert!(err.source().is_none());
        assert!(err.cause().is_none());
    }

    #[test]
    fn position_counts_chars_and_lines() {
        assert_eq!(position("abc", 0), (1, 1));
        assert_eq!(position("abc", 2), (1, 3));
        assert_eq!(position("abc", 3), (1, 4));
        assert_eq!(position("ab\ncd", 4), (2, 2));
        // 'é' is two bytes but one column
        assert_eq!(position("éx", 2), (1, 2));
        // offsets inside a multi-byte char snap back to its start
        assert_eq!(position("éx", 1), (1, 1));
        assert_eq!(position("abc", 99), (1, 4));
    }

    #[test]
    fn cause_is_source() {
        let input = "<1>1 x";
        let cause = ParseError::at(input, Mismatch::new("TIMESTAMP", 5));
        let err = ParseError::at(input, Mismatch::new("HEADER", 0)).caused_by(cause.clone());

        let source = err.source().expect("should have a source");
        assert_eq!(
            source.to_string(),
            "Failed to match sequence (TIMESTAMP) at line 1 char 6."
        );
        assert_eq!(err.cause(), Some(&cause));
        assert_eq!(cause.column(), 6);
    }
}
