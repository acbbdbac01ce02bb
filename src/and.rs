use super::cursor::Cursor;
use super::map::MapExt;
use super::parser::{Interpretations, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Every interpretation of the first parser is continued with every
/// interpretation the second parser finds on its remainder, so ambiguity
/// multiplies through sequencing. The first value is cloned once per
/// continuation, which is why `P1::Output: Clone` is required.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples
/// like `(((a, b), c), d)` rather than flat tuples. The destructuring
/// pattern is explicit about the parsing order.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for And<P1, P2>
where
    P1: Parser<'src>,
    P1::Output: Clone,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output> {
        let mut out = Vec::new();
        for (first, rest) in self.parser1.parse(cursor) {
            for (second, rest2) in self.parser2.parse(rest) {
                out.push(((first.clone(), second), rest2));
            }
        }
        out
    }
}

/// Convenience function to create an And parser
pub fn and<'src, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'src>,
    P1::Output: Clone,
    P2: Parser<'src>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self::Output: Clone,
        P: Parser<'src>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}

/// Sequence two parsers and combine their values with a binary function
pub fn lift2<'src, P1, P2, F, R>(
    parser1: P1,
    parser2: P2,
    f: F,
) -> impl Parser<'src, Output = R>
where
    P1: Parser<'src>,
    P1::Output: Clone,
    P2: Parser<'src>,
    F: Fn(P1::Output, P2::Output) -> R,
{
    parser1.and(parser2).map(move |(a, b)| f(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::string::is_string;

    #[test]
    fn test_and_sequences() {
        let cursor = Cursor::new("ab");
        let parser = is_char('a').and(is_char('b'));

        let interps = parser.parse(cursor);
        assert_eq!(interps.len(), 1);
        assert_eq!(interps[0].0, ('a', 'b'));
        assert!(interps[0].1.at_end());
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = Cursor::new("xb");
        let parser = is_char('a').and(is_char('b'));

        assert!(parser.parse(cursor).is_empty());
    }

    #[test]
    fn test_and_second_fails() {
        let cursor = Cursor::new("ax");
        let parser = is_char('a').and(is_char('b'));

        assert!(parser.parse(cursor).is_empty());
    }

    #[test]
    fn test_and_nested_tuples() {
        let cursor = Cursor::new("abc");
        let parser = is_char('a').and(is_char('b')).and(is_char('c'));

        let interps = parser.parse(cursor);
        assert_eq!(interps[0].0, (('a', 'b'), 'c'));
    }

    #[test]
    fn test_lift2_combines() {
        let cursor = Cursor::new("ab rest");
        let parser = lift2(is_char('a'), is_char('b'), |a, b| format!("{a}{b}"));

        let interps = parser.parse(cursor);
        assert_eq!(interps.len(), 1);
        assert_eq!(interps[0].0, "ab");
        assert_eq!(interps[0].1.rest(), " rest");
    }

    #[test]
    fn test_lift2_string_append() {
        let cursor = Cursor::new("foobar");
        let parser = lift2(is_string("foo"), is_string("bar"), |a, b| {
            format!("{a}{b}")
        });

        let interps = parser.parse(cursor);
        assert_eq!(interps[0].0, "foobar");
    }

    #[test]
    fn test_function_syntax() {
        let cursor = Cursor::new("ab");
        let parser = and(is_char('a'), is_char('b'));

        assert_eq!(parser.parse(cursor).len(), 1);
    }
}
