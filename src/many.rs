use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};
use super::some::some_interps;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Defined as the one-or-more form with a zero-width empty fallback, under
/// the usual commit rule: if even one occurrence can be read, the empty
/// interpretation is never offered. The fallback only appears when the
/// inner parser fails outright at the current position, so this never
/// enumerates every possible length.
///
/// As with [`some`](crate::some::some), an inner parser that succeeds
/// without consuming recurses forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output> {
        many_interps(&self.parser, cursor)
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    Many::new(parser)
}

/// Zero-or-more over a borrowed parser: commit to one-or-more when it yields
/// anything, otherwise a single empty interpretation.
pub(crate) fn many_interps<'src, P>(
    parser: &P,
    cursor: Cursor<'src>,
) -> Interpretations<'src, Vec<P::Output>>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    let consumed = some_interps(parser, cursor);
    if consumed.is_empty() {
        vec![(Vec::new(), cursor)]
    } else {
        consumed
    }
}
