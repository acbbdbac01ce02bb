use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Consumption is untouched: every interpretation keeps its cursor, only the
/// value changes.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, U> {
        self.parser
            .parse(cursor)
            .into_iter()
            .map(|(value, rest)| ((self.mapper)(value), rest))
            .collect()
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}
