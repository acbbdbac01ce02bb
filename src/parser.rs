use super::cursor::Cursor;

/// The ordered set of ways a parser read a prefix of the input.
///
/// Each entry pairs a parsed value with the cursor at the first unconsumed
/// character. An empty set means the parser failed; there is no separate
/// error channel. Order is significant: it records the order of exploration,
/// and the driver reports it unchanged when the input is ambiguous.
pub type Interpretations<'src, T> = Vec<(T, Cursor<'src>)>;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to a set of interpretations.
/// Running the same parser on the same cursor twice yields the same set, and
/// a parser never touches anything but the cursor it is given, so parser
/// values can be shared and reused freely across independent runs.
pub trait Parser<'src>: Sized {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns every interpretation found, in exploration order. An empty
    /// set means the parse failed; no input is ever consumed on failure
    /// because each interpretation carries its own cursor.
    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output>;
}

/// Any function from cursor to interpretations is a parser.
///
/// This is what makes recursive grammars expressible: a grammar rule is a
/// plain `fn` that delegates to combinators, and the rule name itself can be
/// passed wherever a parser is expected, breaking the cycle that struct
/// combinators alone cannot.
impl<'src, F, T> Parser<'src> for F
where
    F: Fn(Cursor<'src>) -> Interpretations<'src, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, T> {
        self(cursor)
    }
}
