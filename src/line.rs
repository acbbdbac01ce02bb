use super::and::lift2;
use super::char::is_char;
use super::many::many;
use super::map::MapExt;
use super::or::OrExt;
use super::parser::Parser;
use super::take_until::take_until;

/// Parser that matches a line feed character
pub fn lf<'src>() -> impl Parser<'src, Output = char> {
    is_char('\n')
}

/// Parser that matches a carriage return character
pub fn cr<'src>() -> impl Parser<'src, Output = char> {
    is_char('\r')
}

/// Parser that matches a carriage return followed by a line feed
pub fn crlf<'src>() -> impl Parser<'src, Output = &'static str> {
    lift2(cr(), lf(), |_, _| "\r\n")
}

/// Parser that matches a line terminator: `"\n"` or `"\r\n"`
///
/// A lone `"\r"` is not recognized as a terminator; it is treated as an
/// ordinary character.
pub fn eol<'src>() -> impl Parser<'src, Output = &'static str> {
    lf().map(|_| "\n").or(crlf())
}

/// Parser that matches one terminated line, yielding its text without the
/// terminator
///
/// Fails on a trailing fragment with no terminator, leaving it unconsumed
/// for the caller.
pub fn line<'src>() -> impl Parser<'src, Output = &'src str> {
    lift2(take_until(eol()), eol(), |text, _| text)
}

/// Parser that matches zero or more terminated lines
pub fn lines<'src>() -> impl Parser<'src, Output = Vec<&'src str>> {
    many(line())
}
