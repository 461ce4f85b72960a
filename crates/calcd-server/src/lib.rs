//! calcd Server
//!
//! This crate provides the HTTP surface of the calculator service: a hyper
//! HTTP/1.1 server, the router that dispatches `GET /{operation}` requests to
//! the operation registry, and the query-string validator.

pub mod http_router;
pub mod http_server;
pub mod query;

pub use http_router::CalcRouter;
pub use http_server::HttpServer;
