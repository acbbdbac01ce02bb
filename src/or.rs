use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser combinator that commits to the first alternative with any interpretation
///
/// If the first parser yields a non-empty set, that set is returned unchanged
/// and the second parser is never run, even when the second would have found
/// more, or different, interpretations. Only when the first set is empty does
/// the second parser get the input. Alternation here is first-success-only,
/// not a merge of both branches; repetition, operator chaining, and the
/// until-terminator scan all rely on this commit rule.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, O> {
        let interps = self.parser1.parse(cursor);
        if interps.is_empty() {
            self.parser2.parse(cursor)
        } else {
            interps
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}
