use super::char::{is_char, satisfy};
use super::cursor::Cursor;
use super::parser::{Interpretations, Parser};
use super::some::some;

/// Parser that matches a single ASCII digit `'0'..='9'`
pub fn digit<'src>() -> impl Parser<'src, Output = char> {
    satisfy(|c| c.is_ascii_digit())
}

/// Parser that matches one or more ASCII digits as a `u64`
///
/// A digit run whose value does not fit in a `u64` yields no interpretation;
/// overflow is a failed parse, not a wrap or a panic.
pub struct Natural;

impl Natural {
    pub fn new() -> Self {
        Natural
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for Natural {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, u64> {
        let mut out = Vec::new();
        for (digits, rest) in some(digit()).parse(cursor) {
            let text: String = digits.into_iter().collect();
            if let Ok(value) = text.parse::<u64>() {
                out.push((value, rest));
            }
        }
        out
    }
}

/// Convenience function to create a Natural parser
pub fn natural() -> Natural {
    Natural::new()
}

/// Parser that matches an optionally negated run of ASCII digits as an `i64`
///
/// The sign is a single optional leading `'-'`; there is no `'+'` form. A
/// lone `'-'` with no digits fails, because the minus commits the parse to
/// the signed branch and the digit run is then required. Magnitudes up to
/// `i64::MAX` are accepted, plus `i64::MIN` for the negative form; anything
/// larger yields no interpretation.
pub struct Integer;

impl Integer {
    pub fn new() -> Self {
        Integer
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for Integer {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'src>) -> Interpretations<'src, i64> {
        let mut sign = is_char('-').parse(cursor);
        let (negative, after_sign) = match sign.pop() {
            Some((_, rest)) => (true, rest),
            None => (false, cursor),
        };

        let mut out = Vec::new();
        for (magnitude, rest) in natural().parse(after_sign) {
            if negative {
                // i64::MIN has a magnitude one past i64::MAX
                if magnitude <= i64::MAX as u64 + 1 {
                    out.push(((magnitude as i64).wrapping_neg(), rest));
                }
            } else if magnitude <= i64::MAX as u64 {
                out.push((magnitude as i64, rest));
            }
        }
        out
    }
}

/// Convenience function to create an Integer parser
pub fn integer() -> Integer {
    Integer::new()
}
