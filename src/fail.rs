use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};
use std::marker::PhantomData;

/// Parser that yields no interpretations on any input
///
/// This is the identity for choice: `or`-ing a parser with `fail` changes
/// nothing.
pub struct Fail<T> {
    _marker: PhantomData<T>,
}

impl<T> Fail<T> {
    pub fn new() -> Self {
        Fail {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Fail<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src, T> Parser<'src> for Fail<T> {
    type Output = T;

    fn parse(&self, _cursor: Cursor<'src>) -> Interpretations<'src, T> {
        Vec::new()
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>() -> Fail<T> {
    Fail::new()
}
