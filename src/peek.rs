use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser combinator that runs a parser without consuming input
///
/// Values come from the inner parser; cursors are rewound to where the
/// lookahead started, one interpretation per way the inner parser matched.
pub struct Peek<P> {
    parser: P,
}

impl<P> Peek<P> {
    pub fn new(parser: P) -> Self {
        Peek { parser }
    }
}

impl<'src, P> Parser<'src> for Peek<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, P::Output> {
        self.parser
            .parse(cursor)
            .into_iter()
            .map(|(value, _)| (value, cursor))
            .collect()
    }
}

/// Convenience function to create a Peek parser
pub fn peek<'src, P>(parser: P) -> Peek<P>
where
    P: Parser<'src>,
{
    Peek::new(parser)
}

/// Extension trait to add .peek() method support for parsers
pub trait PeekExt<'src>: Parser<'src> + Sized {
    fn peek(self) -> Peek<Self> {
        Peek::new(self)
    }
}

/// Implement PeekExt for all parsers
impl<'src, P> PeekExt<'src> for P where P: Parser<'src> {}
