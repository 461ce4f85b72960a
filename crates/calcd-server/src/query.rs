//! Query-String Validation
//!
//! Turns the raw `num1`/`num2` query parameters into validated `f64`
//! operands for an operation. Parsing happens in two steps: the query string
//! is deserialized into optional raw strings, then coerced to numbers, so the
//! untouched input text is still available for the error log when coercion
//! fails.

use calcd_common::protocol::{CalcError, Operation, Result};
use serde::Deserialize;

/// Raw query parameters as they appear on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct RawParams {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

/// Validated operands for an operation.
///
/// `num2` is `None` exactly when the operation is unary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: Option<f64>,
}

/// Parses and validates the query string for `op`.
///
/// Fails with [`CalcError::InvalidInput`] when `num1` — or `num2`, for a
/// binary operation — is absent or does not coerce to a number. For unary
/// operations a supplied `num2` is ignored. The raw inputs and the attempted
/// operation are logged at error level before the failure is returned.
pub fn validate(op: Operation, query: Option<&str>) -> Result<Operands> {
    let raw: RawParams = serde_urlencoded::from_str(query.unwrap_or("")).map_err(|e| {
        tracing::error!(
            operation = op.name(),
            query = query.unwrap_or(""),
            "Malformed query string: {}",
            e
        );
        CalcError::InvalidInput
    })?;

    let num1 = match parse_number(raw.num1.as_deref()) {
        Some(n) => n,
        None => return Err(invalid(op, &raw)),
    };

    let num2 = if op.is_unary() {
        None
    } else {
        match parse_number(raw.num2.as_deref()) {
            Some(n) => Some(n),
            None => return Err(invalid(op, &raw)),
        }
    };

    Ok(Operands { num1, num2 })
}

/// Coerces a raw parameter to `f64`. A value that coerces to NaN (including
/// the literal `NaN`) does not count as a number.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    let parsed = raw?.parse::<f64>().ok()?;
    if parsed.is_nan() {
        None
    } else {
        Some(parsed)
    }
}

fn invalid(op: Operation, raw: &RawParams) -> CalcError {
    tracing::error!(
        operation = op.name(),
        num1 = raw.num1.as_deref().unwrap_or("<missing>"),
        num2 = raw.num2.as_deref().unwrap_or("<missing>"),
        "Invalid input for operation"
    );
    CalcError::InvalidInput
}
