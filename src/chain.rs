use super::cursor::Cursor;
use super::or::OrExt;
use super::parser::{Interpretations, Parser};
use super::succeed::succeed;

/// Parser combinator for left-associative binary operator chains
///
/// Parses one operand, then repeatedly an operator (whose value is the
/// combining function) followed by the next operand, folding strictly left
/// to right as it goes: `1-2-3` combines as `(1-2)-3`. The chain stops, per
/// the commit rule, at the first position where no further operator-operand
/// pair parses, and yields the accumulated value there. No left recursion is
/// involved, so grammars can use this for expression levels directly.
///
/// Precedence is not handled here: each precedence level is its own
/// `chainl1` whose operand parser is the next-tighter level.
pub struct ChainL1<P, Op> {
    parser: P,
    op: Op,
}

impl<P, Op> ChainL1<P, Op> {
    pub fn new(parser: P, op: Op) -> Self {
        ChainL1 { parser, op }
    }
}

impl<'src, P, Op, F> Parser<'src> for ChainL1<P, Op>
where
    P: Parser<'src>,
    P::Output: Clone,
    Op: Parser<'src, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, Self::Output> {
        let mut out = Vec::new();
        for (first, rest) in self.parser.parse(cursor) {
            out.extend(continue_chain(&self.parser, &self.op, first, rest));
        }
        out
    }
}

/// Extend an accumulated operand with as many `op operand` pairs as parse.
///
/// The recursion carries the left fold: by the time the chain stops, `acc`
/// already holds the combined value. The `acc` interpretation at the current
/// cursor is only offered when no pair parses here, mirroring the commit
/// rule of alternation.
fn continue_chain<'src, P, Op, F>(
    parser: &P,
    op: &Op,
    acc: P::Output,
    cursor: Cursor<'src>,
) -> Interpretations<'src, P::Output>
where
    P: Parser<'src>,
    P::Output: Clone,
    Op: Parser<'src, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    let mut out = Vec::new();
    for (combine, after_op) in op.parse(cursor) {
        for (operand, after_operand) in parser.parse(after_op) {
            let folded = combine(acc.clone(), operand);
            out.extend(continue_chain(parser, op, folded, after_operand));
        }
    }
    if out.is_empty() {
        vec![(acc, cursor)]
    } else {
        out
    }
}

/// Convenience function to create a ChainL1 parser
pub fn chainl1<'src, P, Op, F>(parser: P, op: Op) -> ChainL1<P, Op>
where
    P: Parser<'src>,
    P::Output: Clone,
    Op: Parser<'src, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    ChainL1::new(parser, op)
}

/// Left-associative chain that yields a default value when no operand parses
pub fn chainl<'src, P, Op, F>(
    parser: P,
    op: Op,
    default: P::Output,
) -> impl Parser<'src, Output = P::Output>
where
    P: Parser<'src>,
    P::Output: Clone,
    Op: Parser<'src, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    chainl1(parser, op).or(succeed(default))
}
