use super::cursor::Cursor;
use super::many::many_interps;
use super::parser::{Interpretations, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// One occurrence is parsed, then for every interpretation of it the
/// zero-or-more form continues on the remainder, so repetition threads
/// through ambiguous elements the same way sequencing does. Longer matches
/// come first in the result set.
///
/// The inner parser must consume at least one character whenever it
/// succeeds. A zero-width success recurses forever; this is a caller
/// contract, not something the combinator detects.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output> {
        some_interps(&self.parser, cursor)
    }
}

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    Some::new(parser)
}

/// One-or-more over a borrowed parser; shared with the zero-or-more form so
/// the two can recurse into each other without cloning the inner parser.
pub(crate) fn some_interps<'src, P>(
    parser: &P,
    cursor: Cursor<'src>,
) -> Interpretations<'src, Vec<P::Output>>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    let mut out = Vec::new();
    for (first, rest) in parser.parse(cursor) {
        for (tail, rest2) in many_interps(parser, rest) {
            let mut items = Vec::with_capacity(tail.len() + 1);
            items.push(first.clone());
            items.extend(tail);
            out.push((items, rest2));
        }
    }
    out
}
