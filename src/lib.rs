//! # Ambicomb - Backtracking Parser Combinators
//!
//! A parser combinator library built around interpretation sets: a parser
//! maps a cursor to *every* way it can read a prefix of the input, and the
//! empty set is failure. Composable parsers combine into larger ones while
//! the set model carries backtracking and ambiguity for free. The library
//! emphasizes:
//!
//! - **Structural failure**: no panics and no error channel inside
//!   combinators; a failed branch is simply an interpretation that never
//!   gets produced
//! - **Committed alternation**: `or` takes the first branch that matches at
//!   all, which keeps repetition and operator chains from exploding into
//!   every possible length
//! - **Ambiguity as data**: alternations merged by hand can keep several
//!   readings alive, and only the `run` driver judges whether that is an
//!   error
//! - **Purity**: parsers are immutable values over an immutable cursor, so
//!   they can be shared and re-run freely
//!
//! One contract is the caller's: the body of `some`/`many` must consume
//! input whenever it succeeds. A zero-width repetition body recurses
//! without bound.

pub mod and;
pub mod and_then;
pub mod chain;
pub mod char;
pub mod cursor;
pub mod end;
pub mod error;
pub mod fail;
pub mod lexeme;
pub mod line;
pub mod many;
pub mod map;
pub mod number;
pub mod or;
pub mod parser;
pub mod peek;
pub mod run;
pub mod some;
pub mod string;
pub mod succeed;
pub mod take_until;

pub use and::{And, AndExt, and, lift2};
pub use and_then::{AndThen, AndThenExt, and_then};
pub use chain::{ChainL1, chainl, chainl1};
pub use char::{AnyChar, Satisfy, any_char, is_char, one_of, satisfy};
pub use cursor::Cursor;
pub use end::{End, end};
pub use error::{Location, RunError};
pub use fail::{Fail, fail};
pub use lexeme::{Token, parens, reserved, space, spaces, token};
pub use line::{cr, crlf, eol, lf, line, lines};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use number::{Integer, Natural, digit, integer, natural};
pub use or::{Or, OrExt, or};
pub use parser::{Interpretations, Parser};
pub use peek::{Peek, PeekExt, peek};
pub use run::{Outcome, run};
pub use some::some;
pub use string::{IsString, is_string};
pub use succeed::{Succeed, succeed};
pub use take_until::{TakeUntil, take_until};
