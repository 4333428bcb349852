//! Checked rational arithmetic for the four equation operators
//!
//! Every value is kept as a reduced fraction of two integral `Decimal`s, so
//! `1/3*30` is exactly 10 and rounding happens only once, at the end.

use crate::ast::Operator;
use crate::error::EvalErrorKind;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Exact quotient `numer / denom`. The denominator is always positive and the
/// fraction is in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numer: Decimal,
    denom: Decimal,
}

impl Fraction {
    pub fn integer(value: Decimal) -> Self {
        Self {
            numer: value,
            denom: Decimal::ONE,
        }
    }

    pub fn numer(&self) -> Decimal {
        self.numer
    }

    pub fn denom(&self) -> Decimal {
        self.denom
    }

    fn new(numer: Decimal, denom: Decimal) -> Result<Self, EvalErrorKind> {
        if denom.is_zero() {
            return Err(EvalErrorKind::DivisionByZero);
        }

        let (numer, denom) = if denom.is_sign_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        let divisor = gcd(numer.abs(), denom)?;
        Ok(Self {
            numer: exact_div(numer, divisor)?,
            denom: exact_div(denom, divisor)?,
        })
    }

    /// Integer part, truncated toward zero
    pub fn trunc_to_i64(&self) -> Option<i64> {
        let magnitude = self.numer.abs();
        let remainder = magnitude.checked_rem(self.denom)?;
        let whole = exact_div(magnitude.checked_sub(remainder)?, self.denom).ok()?;
        let whole = if self.numer.is_sign_negative() {
            -whole
        } else {
            whole
        };
        whole.to_i64()
    }
}

fn gcd(mut a: Decimal, mut b: Decimal) -> Result<Decimal, EvalErrorKind> {
    while !b.is_zero() {
        let r = a.checked_rem(b).ok_or(EvalErrorKind::Overflow)?;
        a = b;
        b = r;
    }
    // gcd(0, 0) only arises for 0/0, which `new` already rejects
    Ok(if a.is_zero() { Decimal::ONE } else { a })
}

// `divisor` divides `value` evenly, so the quotient stays integral
fn exact_div(value: Decimal, divisor: Decimal) -> Result<Decimal, EvalErrorKind> {
    value
        .checked_div(divisor)
        .map(|q| q.trunc())
        .ok_or(EvalErrorKind::Overflow)
}

fn checked(value: Option<Decimal>) -> Result<Decimal, EvalErrorKind> {
    value.ok_or(EvalErrorKind::Overflow)
}

/// Apply `op` to two exact operands.
pub fn arithmetic_operation(
    left: Fraction,
    op: Operator,
    right: Fraction,
) -> Result<Fraction, EvalErrorKind> {
    let (a, b) = (left.numer, left.denom);
    let (c, d) = (right.numer, right.denom);

    match op {
        Operator::Add | Operator::Subtract => {
            let ad = checked(a.checked_mul(d))?;
            let cb = checked(c.checked_mul(b))?;
            let numer = match op {
                Operator::Add => checked(ad.checked_add(cb))?,
                _ => checked(ad.checked_sub(cb))?,
            };
            Fraction::new(numer, checked(b.checked_mul(d))?)
        }
        Operator::Multiply => {
            Fraction::new(checked(a.checked_mul(c))?, checked(b.checked_mul(d))?)
        }
        Operator::Divide => {
            if c.is_zero() {
                return Err(EvalErrorKind::DivisionByZero);
            }
            Fraction::new(checked(a.checked_mul(d))?, checked(b.checked_mul(c))?)
        }
    }
}
