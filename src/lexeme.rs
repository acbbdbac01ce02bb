use super::and::AndExt;
use super::char::one_of;
use super::cursor::Cursor;
use super::many::many;
use super::map::MapExt;
use super::parser::{Interpretations, Parser};
use super::string::is_string;

/// Parser that matches a single whitespace character: space, newline, or
/// carriage return
pub fn space<'src>() -> impl Parser<'src, Output = char> {
    one_of(" \n\r")
}

/// Parser that matches zero or more whitespace characters, joined into a string
pub fn spaces<'src>() -> impl Parser<'src, Output = String> {
    many(space()).map(|chars| chars.into_iter().collect())
}

/// Parser combinator that consumes trailing whitespace after another parser
///
/// The convention throughout the lexeme layer is trailing-only: a token
/// eats the whitespace after itself, never before. A grammar that allows
/// leading whitespace consumes it once at the top.
pub struct Token<P> {
    parser: P,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Token { parser }
    }
}

impl<'src, P> Parser<'src> for Token<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output> {
        let trailing = spaces();
        let mut out = Vec::new();
        for (value, rest) in self.parser.parse(cursor) {
            for (_, rest2) in trailing.parse(rest) {
                out.push((value.clone(), rest2));
            }
        }
        out
    }
}

/// Convenience function to create a Token parser
pub fn token<'src, P>(parser: P) -> Token<P>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    Token::new(parser)
}

/// Parser for a literal keyword or punctuation mark with trailing whitespace
pub fn reserved<'src>(literal: &'static str) -> impl Parser<'src, Output = &'src str> {
    token(is_string(literal))
}

/// Parser combinator that wraps another parser in literal parentheses
///
/// Whitespace after `(`, after the body, and after `)` is handled by the
/// lexeme convention; whitespace before `(` is not.
pub fn parens<'src, P>(parser: P) -> impl Parser<'src, Output = P::Output>
where
    P: Parser<'src>,
    P::Output: Clone,
{
    reserved("(")
        .and(parser)
        .and(reserved(")"))
        .map(|((_, value), _)| value)
}
