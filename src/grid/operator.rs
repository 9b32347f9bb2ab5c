//! Arithmetic operators and the left fold used by row/column reduction

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};

/// One of the four binary operators a reduction can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator symbol to its variant
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(GridError::InvalidOperator(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Compute `lhs op rhs`
    ///
    /// Division fails when `rhs` compares equal to zero (`-0.0` included).
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(GridError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c),
            // Report the first character, or a space for empty input
            (first, _) => Err(GridError::InvalidOperator(first.unwrap_or(' '))),
        }
    }
}

/// Left fold seeded by the first value: `((v0 op v1) op v2) ...`
///
/// Returns `None` for an empty sequence; the caller decides which bound
/// that violates. Stops at the first zero divisor.
pub fn fold<I>(values: I, op: Operator) -> Option<Result<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let seed = iter.next()?;
    Some(iter.try_fold(seed, |acc, v| op.apply(acc, v)))
}
