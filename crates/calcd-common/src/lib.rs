//! calcd Common Types and HTTP Helpers
//!
//! This crate provides the protocol definitions shared by the calcd
//! calculator service: the response envelope, the error taxonomy, the
//! operation registry, and the HTTP conversion helpers.
//!
//! # Overview
//!
//! calcd exposes elementary arithmetic over HTTP query parameters. Every
//! route answers with a JSON envelope whose `statuscode` field mirrors the
//! HTTP status, so the protocol layer here is deliberately small:
//!
//! - **Protocol Layer**: the [`protocol::ApiResponse`] envelope, the
//!   [`protocol::CalcError`] taxonomy, and the [`protocol::Operation`]
//!   registry of pure `f64` functions.
//! - **Transport Layer**: conversion from envelopes to hyper responses.
//!
//! # Example
//!
//! ```
//! use calcd_common::protocol::{ApiResponse, Operation};
//!
//! let op: Operation = "add".parse().unwrap();
//! let result = op.apply(2.0, Some(3.0)).unwrap();
//! let response = ApiResponse::success(result);
//! assert_eq!(response.statuscode, 200);
//! ```

pub mod protocol;
pub mod transport;

pub use protocol::*;
