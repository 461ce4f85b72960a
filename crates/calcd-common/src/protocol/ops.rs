//! Operation Registry
//!
//! The fixed set of arithmetic operations the service exposes, as a sum type
//! dispatched through a single exhaustive `match`. The only place an unknown
//! operation name can surface is [`FromStr`], which fails with
//! [`CalcError::OperationNotFound`]; past that boundary dispatch cannot miss.
//!
//! All operations are pure functions over `f64` operands. Unary operations
//! (`sqrt`, `abs`) take `num1` only; the rest take `num1` and `num2`.
//!
//! # Example
//!
//! ```
//! use calcd_common::protocol::Operation;
//!
//! let op: Operation = "divide".parse().unwrap();
//! assert_eq!(op.apply(10.0, Some(4.0)).unwrap(), 2.5);
//! assert!(op.apply(10.0, Some(0.0)).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// An arithmetic operation the service can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
    Sqrt,
    Modulo,
    Abs,
    Remainder,
}

impl Operation {
    /// Every supported operation, in the order the usage banner lists them.
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Exponent,
        Operation::Sqrt,
        Operation::Modulo,
        Operation::Abs,
        Operation::Remainder,
    ];

    /// Wire name of the operation, as it appears in the request path.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Exponent => "exponent",
            Operation::Sqrt => "sqrt",
            Operation::Modulo => "modulo",
            Operation::Abs => "abs",
            Operation::Remainder => "remainder",
        }
    }

    /// Whether the operation takes `num1` only.
    pub fn is_unary(self) -> bool {
        matches!(self, Operation::Sqrt | Operation::Abs)
    }

    /// Evaluates the operation over the validated operands.
    ///
    /// Domain errors are [`CalcError::DivisionByZero`] and
    /// [`CalcError::NegativeRadicand`]. A binary operation invoked without
    /// `num2` fails with [`CalcError::InvalidInput`]; validation makes that
    /// unreachable, but the function stays total.
    pub fn apply(self, num1: f64, num2: Option<f64>) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(num1 + self.operand2(num2)?),
            Operation::Subtract => Ok(num1 - self.operand2(num2)?),
            Operation::Multiply => Ok(num1 * self.operand2(num2)?),
            Operation::Divide => {
                let num2 = self.operand2(num2)?;
                if num2 == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(num1 / num2)
                }
            }
            Operation::Exponent => Ok(num1.powf(self.operand2(num2)?)),
            Operation::Sqrt => {
                if num1 < 0.0 {
                    Err(CalcError::NegativeRadicand)
                } else {
                    Ok(num1.sqrt())
                }
            }
            // `%` on f64 is the IEEE 754 truncating remainder; the result
            // keeps the dividend's sign. Both names dispatch to it.
            Operation::Modulo | Operation::Remainder => Ok(num1 % self.operand2(num2)?),
            Operation::Abs => Ok(num1.abs()),
        }
    }

    fn operand2(self, num2: Option<f64>) -> Result<f64, CalcError> {
        num2.ok_or(CalcError::InvalidInput)
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "exponent" => Ok(Operation::Exponent),
            "sqrt" => Ok(Operation::Sqrt),
            "modulo" => Ok(Operation::Modulo),
            "abs" => Ok(Operation::Abs),
            "remainder" => Ok(Operation::Remainder),
            other => Err(CalcError::OperationNotFound(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
