use super::cursor::Cursor;
use super::error::{Location, RunError};
use super::parser::{Interpretations, Parser};

/// The judged result of running a parser on a complete input
///
/// Combinators are free to produce many interpretations internally; this is
/// the one place where the final set is classified. A consumer handles all
/// four cases; ambiguity and partial consumption are surfaced, never
/// resolved silently.
#[derive(Debug, PartialEq)]
pub enum Outcome<'src, T> {
    /// Exactly one interpretation, and it consumed the whole input
    Success(T),
    /// No interpretation matched
    NoMatch,
    /// More than one interpretation matched; the full set is kept for
    /// diagnostics
    Ambiguous(Interpretations<'src, T>),
    /// A single interpretation matched a strict prefix of the input
    Incomplete(Interpretations<'src, T>),
}

impl<'src, T> Outcome<'src, T> {
    /// Collapse the outcome into a `Result`, keeping only a success value
    pub fn into_result(self) -> Result<T, RunError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::NoMatch => Err(RunError::NoMatch),
            Outcome::Ambiguous(interps) => Err(RunError::Ambiguous {
                interpretations: interps.len(),
            }),
            Outcome::Incomplete(interps) => {
                let location = interps
                    .first()
                    .map(|(_, rest)| Location::of(rest))
                    .unwrap_or(Location { line: 1, offset: 0 });
                Err(RunError::Incomplete { location })
            }
        }
    }
}

/// Run a parser over a complete source string and judge the result set
///
/// The parser is borrowed, not consumed; the same parser value can be run
/// over any number of inputs.
pub fn run<'src, P>(parser: &P, source: &'src str) -> Outcome<'src, P::Output>
where
    P: Parser<'src>,
{
    let mut interps = parser.parse(Cursor::new(source));
    log::trace!("run: {} interpretation(s)", interps.len());

    if interps.len() > 1 {
        return Outcome::Ambiguous(interps);
    }
    match interps.pop() {
        None => Outcome::NoMatch,
        Some((value, rest)) if rest.at_end() => Outcome::Success(value),
        Some((value, rest)) => {
            log::trace!("run: stalled at byte {}", rest.position());
            Outcome::Incomplete(vec![(value, rest)])
        }
    }
}
