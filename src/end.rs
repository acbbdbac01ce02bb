use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser that succeeds only at end of input, consuming nothing
///
/// Yields the empty string so it composes with other string-valued parsers
/// in alternations.
pub struct End;

impl End {
    pub fn new() -> Self {
        End
    }
}

impl Default for End {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for End {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, &'src str> {
        if cursor.at_end() {
            vec![("", cursor)]
        } else {
            vec![]
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End::new()
}
