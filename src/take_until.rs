use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};

/// Parser combinator that consumes characters until another parser would match
///
/// At each position, three alternatives are tried in order under the commit
/// rule: end of input stops the scan; a lookahead match of the stop parser
/// stops the scan without consuming the match; otherwise one character is
/// consumed and the scan continues. The scan therefore never fails (worst
/// case it consumes the whole input) and yields the text it walked over.
///
/// When the stop parser itself matches ambiguously, one interpretation is
/// produced per match, all with the same text and cursor.
pub struct TakeUntil<P> {
    stop: P,
}

impl<P> TakeUntil<P> {
    pub fn new(stop: P) -> Self {
        TakeUntil { stop }
    }
}

impl<'src, P> Parser<'src> for TakeUntil<P>
where
    P: Parser<'src>,
{
    type Output = &'src str;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, &'src str> {
        let mut current = cursor;
        loop {
            // End of input wins over a stop match at the same position.
            let Some((_, rest)) = current.next() else {
                return vec![(current.consumed_since(cursor), current)];
            };
            let stops = self.stop.parse(current);
            if !stops.is_empty() {
                let text = current.consumed_since(cursor);
                return stops.into_iter().map(|_| (text, current)).collect();
            }
            current = rest;
        }
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<'src, P>(stop: P) -> TakeUntil<P>
where
    P: Parser<'src>,
{
    TakeUntil::new(stop)
}
