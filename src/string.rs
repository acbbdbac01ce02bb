use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser that matches an exact string literal character by character
///
/// Yields the matched slice of the source on success. The empty literal
/// matches anywhere without consuming.
pub struct IsString {
    expected: &'static str,
}

impl IsString {
    pub fn new(expected: &'static str) -> Self {
        IsString { expected }
    }
}

impl<'src> Parser<'src> for IsString {
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, &'src str> {
        let mut current = cursor;
        for expected_char in self.expected.chars() {
            match current.next() {
                Some((c, rest)) if c == expected_char => current = rest,
                _ => return vec![],
            }
        }
        vec![(current.consumed_since(cursor), current)]
    }
}

/// Convenience function to create an IsString parser
pub fn is_string(expected: &'static str) -> IsString {
    IsString::new(expected)
}
