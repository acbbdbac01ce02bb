use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser that consumes and returns a single character
///
/// This is the only primitive that consumes input; every other combinator
/// composes it. Yields exactly one interpretation on non-empty input and
/// none at end of input.
pub struct AnyChar;

impl AnyChar {
    pub fn new() -> Self {
        AnyChar
    }
}

impl Default for AnyChar {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for AnyChar {
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, char> {
        match cursor.next() {
            Some((c, rest)) => vec![(c, rest)],
            None => vec![],
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar::new()
}

/// Parser that consumes one character if it satisfies a predicate
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'src, F> Parser<'src> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, char> {
        match cursor.next() {
            Some((c, rest)) if (self.predicate)(c) => vec![(c, rest)],
            _ => vec![],
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that matches one specific character
pub fn is_char<'src>(expected: char) -> impl Parser<'src, Output = char> {
    satisfy(move |c| c == expected)
}

/// Parser that matches any character from the given set
pub fn one_of<'src>(set: &'static str) -> impl Parser<'src, Output = char> {
    satisfy(move |c| set.contains(c))
}
