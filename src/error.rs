use super::cursor::Cursor;
use std::error::Error;
use std::fmt;

/// Human-readable position of a cursor within its source
///
/// The offset is a byte offset within the line rather than a column number;
/// columns depend on encoding and rendering, byte offsets do not.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// Byte offset within that line
    pub offset: usize,
}

impl Location {
    pub fn of(cursor: &Cursor<'_>) -> Self {
        let consumed = &cursor.source()[..cursor.position()];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Location {
            line,
            offset: cursor.position() - line_start,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, byte offset {}", self.line, self.offset)
    }
}

/// Error form of a failed or indecisive run, for callers that want `?`
/// instead of matching the outcome themselves
#[derive(Debug, PartialEq, Eq)]
pub enum RunError {
    /// No interpretation matched any prefix of the input
    NoMatch,
    /// More than one interpretation matched; the grammar is non-deterministic
    /// on this input
    Ambiguous { interpretations: usize },
    /// Exactly one interpretation matched, but it stopped before the end of
    /// the input
    Incomplete { location: Location },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::NoMatch => {
                write!(f, "no interpretation matched the input")
            }
            RunError::Ambiguous { interpretations } => {
                write!(f, "input is ambiguous: {} interpretations", interpretations)
            }
            RunError::Incomplete { location } => {
                write!(f, "parse stopped before end of input at {}", location)
            }
        }
    }
}

impl Error for RunError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at<'src>(source: &'src str, skip: usize) -> Cursor<'src> {
        let mut cursor = Cursor::new(source);
        for _ in 0..skip {
            cursor = match cursor.next() {
                Some((_, rest)) => rest,
                None => cursor,
            };
        }
        cursor
    }

    #[test]
    fn test_location_first_line() {
        let cursor = cursor_at("hello", 3);
        let loc = Location::of(&cursor);
        assert_eq!(loc, Location { line: 1, offset: 3 });
    }

    #[test]
    fn test_location_counts_lines() {
        let cursor = cursor_at("ab\ncd\nef", 7);
        let loc = Location::of(&cursor);
        assert_eq!(loc, Location { line: 3, offset: 1 });
    }

    #[test]
    fn test_location_start_of_line() {
        let cursor = cursor_at("ab\ncd", 3);
        let loc = Location::of(&cursor);
        assert_eq!(loc, Location { line: 2, offset: 0 });
    }

    #[test]
    fn test_run_error_display() {
        assert_eq!(
            RunError::NoMatch.to_string(),
            "no interpretation matched the input"
        );
        assert_eq!(
            RunError::Ambiguous { interpretations: 2 }.to_string(),
            "input is ambiguous: 2 interpretations"
        );
        let incomplete = RunError::Incomplete {
            location: Location { line: 2, offset: 5 },
        };
        assert_eq!(
            incomplete.to_string(),
            "parse stopped before end of input at line 2, byte offset 5"
        );
    }
}
