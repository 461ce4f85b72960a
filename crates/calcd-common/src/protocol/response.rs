//! Response Envelope
//!
//! Every calculator route answers with this JSON envelope. The `statuscode`
//! field mirrors the HTTP status of the response; `data` is present on
//! success and `msg` on failure, never both.

use serde::{Deserialize, Serialize};

/// JSON envelope for calculator responses.
///
/// # Wire Shape
///
/// - Success: `{"statuscode":200,"data":3.0}`
/// - Failure: `{"statuscode":400,"msg":"Division by zero is not allowed"}`
///
/// # Example
///
/// ```
/// use calcd_common::protocol::ApiResponse;
///
/// let ok = ApiResponse::success(3.0);
/// assert_eq!(ok.statuscode, 200);
///
/// let err = ApiResponse::failure(404, "Operation not found: foo");
/// assert_eq!(err.statuscode, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    /// Mirrors the HTTP status of the response
    pub statuscode: u16,
    /// Numeric result (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<f64>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ApiResponse {
    /// Creates a 200 response carrying the computed value.
    pub fn success(data: f64) -> Self {
        ApiResponse {
            statuscode: 200,
            data: Some(data),
            msg: None,
        }
    }

    /// Creates an error response with the given status and message.
    pub fn failure(statuscode: u16, msg: impl Into<String>) -> Self {
        ApiResponse {
            statuscode,
            data: None,
            msg: Some(msg.into()),
        }
    }
}
