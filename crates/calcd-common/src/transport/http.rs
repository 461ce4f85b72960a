//! HTTP Transport Utilities
//!
//! Conversion from protocol envelopes to hyper responses, plus type aliases
//! for the hyper request/response types the server works with.

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};

use crate::protocol::ApiResponse;

/// Type alias for hyper incoming requests
pub type HyperRequest = Request<Incoming>;

/// Type alias for hyper responses with full body
pub type HyperResponse = Response<Full<Bytes>>;

/// HTTP transport utility functions
pub struct HttpTransport;

impl HttpTransport {
    /// Renders an envelope as an HTTP response.
    ///
    /// The HTTP status mirrors the envelope's `statuscode` field; an
    /// out-of-range value degrades to 500 rather than panicking.
    pub fn to_http_response(envelope: ApiResponse) -> HyperResponse {
        let status = StatusCode::from_u16(envelope.statuscode)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::to_vec(&envelope).unwrap_or_default();

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    /// Renders a plain-text 200 response (the usage banner).
    pub fn to_text_response(body: impl Into<String>) -> HyperResponse {
        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(Full::new(Bytes::from(body.into())))
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mirrors_envelope() {
        let response = HttpTransport::to_http_response(ApiResponse::success(1.0));
        assert_eq!(response.status(), StatusCode::OK);

        let response =
            HttpTransport::to_http_response(ApiResponse::failure(404, "Operation not found: x"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = HttpTransport::to_http_response(ApiResponse::failure(400, "Invalid input"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_content_type() {
        let response = HttpTransport::to_http_response(ApiResponse::success(1.0));
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_out_of_range_status_degrades_to_500() {
        let response = HttpTransport::to_http_response(ApiResponse::failure(42, "bad"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_text_response() {
        let response = HttpTransport::to_text_response("usage");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
