//! An arithmetic expression language built on the combinators: integers,
//! `+`/`-`/`*`, and parentheses, parsed into a tree and evaluated. Operator
//! precedence comes entirely from which rule calls which: `expr` chains
//! `term`s with additive operators, `term` chains `factor`s with `*`, while
//! each chain folds left on its own level.

use ambicomb::{
    Cursor, Interpretations, MapExt, OrExt, Outcome, Parser, RunError, chainl1, integer,
    parens, reserved, run,
};

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Lit(i64),
}

fn eval(expr: &Expr) -> i64 {
    match expr {
        Expr::Add(a, b) => eval(a) + eval(b),
        Expr::Mul(a, b) => eval(a) * eval(b),
        Expr::Sub(a, b) => eval(a) - eval(b),
        Expr::Lit(n) => *n,
    }
}

type ExprOp = fn(Expr, Expr) -> Expr;

fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(Box::new(a), Box::new(b))
}

fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(Box::new(a), Box::new(b))
}

fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(Box::new(a), Box::new(b))
}

fn infix_op<'src>(symbol: &'static str, f: ExprOp) -> impl Parser<'src, Output = ExprOp> {
    reserved(symbol).map(move |_| f)
}

fn add_op<'src>() -> impl Parser<'src, Output = ExprOp> {
    infix_op("+", add).or(infix_op("-", sub))
}

fn mul_op<'src>() -> impl Parser<'src, Output = ExprOp> {
    infix_op("*", mul)
}

fn lit<'src>() -> impl Parser<'src, Output = Expr> {
    integer().map(Expr::Lit)
}

fn expr(cursor: Cursor<'_>) -> Interpretations<'_, Expr> {
    chainl1(term, add_op()).parse(cursor)
}

fn term(cursor: Cursor<'_>) -> Interpretations<'_, Expr> {
    chainl1(factor, mul_op()).parse(cursor)
}

fn factor(cursor: Cursor<'_>) -> Interpretations<'_, Expr> {
    lit().or(parens(expr)).parse(cursor)
}

fn eval_source(source: &str) -> Result<i64, RunError> {
    run(&expr, source).into_result().map(|tree| eval(&tree))
}

#[test]
fn literal_parses_to_lit() {
    assert_eq!(run(&expr, "42"), Outcome::Success(Expr::Lit(42)));
    assert_eq!(eval_source("-7"), Ok(-7));
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(eval_source("1+2*11"), Ok(23));
}

#[test]
fn parens_override_nesting() {
    assert_eq!(eval_source("(1+2)*11"), Ok(33));
}

#[test]
fn subtraction_folds_left() {
    // (10 - 4) - 3
    assert_eq!(eval_source("10-4-3"), Ok(3));
}

#[test]
fn mixed_additive_operators_fold_left() {
    // ((1 + 2) - 3) + 4
    assert_eq!(eval_source("1+2-3+4"), Ok(4));
}

#[test]
fn nested_parens() {
    assert_eq!(eval_source("((2))"), Ok(2));
    assert_eq!(eval_source("2*(3-1)"), Ok(4));
}

#[test]
fn whitespace_after_operators_and_parens() {
    // The lexeme layer consumes trailing whitespace, so spaces are fine
    // after an operator or an opening paren, but not before one.
    assert_eq!(eval_source("( 1+ 2) * 11"), Ok(33));
}

#[test]
fn dangling_operator_is_incomplete() {
    match run(&expr, "1+") {
        Outcome::Incomplete(interps) => {
            assert_eq!(interps.len(), 1);
            assert_eq!(interps[0].0, Expr::Lit(1));
            assert_eq!(interps[0].1.rest(), "+");
        }
        other => panic!("expected Incomplete, got {:?}", other),
    }
}

#[test]
fn non_expression_is_no_match() {
    assert_eq!(eval_source("abc"), Err(RunError::NoMatch));
}

#[test]
fn tree_shape_is_left_folded() {
    let tree = match run(&expr, "1-2-3") {
        Outcome::Success(tree) => tree,
        other => panic!("expected Success, got {:?}", other),
    };
    assert_eq!(
        tree,
        Expr::Sub(
            Box::new(Expr::Sub(
                Box::new(Expr::Lit(1)),
                Box::new(Expr::Lit(2))
            )),
            Box::new(Expr::Lit(3)),
        )
    );
}
