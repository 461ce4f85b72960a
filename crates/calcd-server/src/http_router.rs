//! Request Routing and Dispatch
//!
//! The router resolves the request path against the operation registry,
//! validates the query parameters, invokes the operation, and maps the
//! outcome to an HTTP response. Every request ends in exactly one of three
//! terminal outcomes — success, client error, or server error — and every
//! outcome emits a log line.
//!
//! # Routes
//!
//! - `GET /` — plain-text usage banner naming all supported operations
//! - `GET /{operation}?num1=<number>&num2=<number>` — evaluate the operation
//!   (`num2` omitted for `sqrt` and `abs`)
//!
//! Anything else — unknown names, nested paths, non-GET methods — resolves to
//! the 404 not-found outcome.

use std::str::FromStr;

use calcd_common::protocol::{ApiResponse, CalcError, Operation, Result};
use calcd_common::transport::{HttpTransport, HyperResponse};
use hyper::{Method, Request};

use crate::query::{self, Operands};

/// Router for the calculator service.
///
/// Stateless: the operation registry is a value type and handlers share no
/// mutable state, so one router serves every connection.
#[derive(Debug, Default)]
pub struct CalcRouter;

impl CalcRouter {
    /// Creates a new router.
    pub fn new() -> Self {
        CalcRouter
    }

    /// Handles a single request.
    ///
    /// All errors are caught here at the request boundary: they are logged
    /// with full detail and translated to a sanitized envelope, so this
    /// function always produces a response.
    pub async fn handle<B>(&self, req: Request<B>) -> HyperResponse {
        if req.method() == Method::GET && req.uri().path() == "/" {
            return HttpTransport::to_text_response(usage_banner());
        }

        match Self::dispatch(&req) {
            Ok((op, operands, result)) => {
                tracing::info!(
                    operation = op.name(),
                    num1 = operands.num1,
                    num2 = ?operands.num2,
                    result = result,
                    "Operation succeeded"
                );
                HttpTransport::to_http_response(ApiResponse::success(result))
            }
            Err(e) => {
                tracing::error!(
                    method = %req.method(),
                    uri = %req.uri(),
                    "Request failed: {}",
                    e
                );
                HttpTransport::to_http_response(ApiResponse::failure(
                    e.status_code(),
                    e.client_message(),
                ))
            }
        }
    }

    /// Resolves, validates, and invokes the requested operation.
    fn dispatch<B>(req: &Request<B>) -> Result<(Operation, Operands, f64)> {
        if req.method() != Method::GET {
            return Err(CalcError::OperationNotFound(format!(
                "{} {}",
                req.method(),
                req.uri().path()
            )));
        }

        let op = operation_from_path(req.uri().path())?;
        let operands = query::validate(op, req.uri().query())?;
        let result = op.apply(operands.num1, operands.num2)?;
        Ok((op, operands, result))
    }
}

/// Parses the path as an operation name.
///
/// Only single-segment paths name operations; nested paths fall through to
/// not-found like any unknown name.
fn operation_from_path(path: &str) -> Result<Operation> {
    let name = path.strip_prefix('/').unwrap_or(path);
    if name.is_empty() || name.contains('/') {
        return Err(CalcError::OperationNotFound(name.to_string()));
    }
    Operation::from_str(name)
}

/// Usage banner served at `/`.
fn usage_banner() -> String {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
    format!(
        "Calculator service. Usage: GET /{{operation}}?num1=<number>&num2=<number> \
         (num2 omitted for sqrt and abs). Supported operations: {}",
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn get(uri: &str) -> Request<()> {
        Request::builder().method(Method::GET).uri(uri).body(()).unwrap()
    }

    async fn body_json(response: HyperResponse) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_usage_banner() {
        let response = CalcRouter::new().handle(get("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let banner = String::from_utf8(bytes.to_vec()).unwrap();
        for op in Operation::ALL {
            assert!(banner.contains(op.name()), "banner missing {}", op.name());
        }
    }

    #[tokio::test]
    async fn test_successful_addition() {
        let response = CalcRouter::new().handle(get("/add?num1=1.5&num2=2.25")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["statuscode"], 200);
        assert_eq!(body["data"], 3.75);
        assert!(body.get("msg").is_none());
    }

    #[tokio::test]
    async fn test_successful_sqrt() {
        let response = CalcRouter::new().handle(get("/sqrt?num1=9")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], 3.0);
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let response = CalcRouter::new().handle(get("/divide?num1=10&num2=0")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["statuscode"], 400);
        assert!(body["msg"].as_str().unwrap().contains("zero"));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_negative_radicand() {
        let response = CalcRouter::new().handle(get("/sqrt?num1=-4")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["msg"].as_str().unwrap().contains("square root"));
    }

    #[tokio::test]
    async fn test_operation_not_found() {
        let response = CalcRouter::new().handle(get("/unknown?num1=1&num2=2")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["statuscode"], 404);
        assert!(body["msg"].as_str().unwrap().contains("Operation not found"));
    }

    #[tokio::test]
    async fn test_invalid_input() {
        let response = CalcRouter::new().handle(get("/add?num1=abc&num2=2")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["msg"].as_str().unwrap().contains("Invalid input"));
    }

    #[tokio::test]
    async fn test_non_get_method_is_not_found() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/add?num1=1&num2=2")
            .body(())
            .unwrap();
        let response = CalcRouter::new().handle(req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_nested_path_is_not_found() {
        let response = CalcRouter::new().handle(get("/add/extra?num1=1&num2=2")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_modulo_by_zero_yields_null_data() {
        let response = CalcRouter::new().handle(get("/modulo?num1=7&num2=0")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["statuscode"], 200);
        assert!(body["data"].is_null());
    }
}
