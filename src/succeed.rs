use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser that yields a single fixed value without consuming any input
///
/// This is the identity for sequencing: chaining a parser through `succeed`
/// changes nothing.
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'src, T> Parser<'src> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, T> {
        vec![(self.value.clone(), cursor)]
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}
