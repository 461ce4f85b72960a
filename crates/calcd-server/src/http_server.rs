//! HTTP Server
//!
//! hyper HTTP/1.1 server for the calculator service. The server accepts TCP
//! connections, spawns a tokio task per connection, and hands each request to
//! the [`CalcRouter`].
//!
//! Per-connection errors are logged and never terminate the process; only a
//! failure to bind or accept surfaces from [`HttpServer::run`].
//!
//! # Example
//!
//! ```no_run
//! use calcd_server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = HttpServer::new();
//!     server.run("0.0.0.0:3000".parse().unwrap()).await.unwrap();
//! }
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use calcd_common::protocol::{CalcError, Result};
use calcd_common::transport::HyperRequest;

use crate::http_router::CalcRouter;

/// HTTP server for the calculator service.
#[derive(Debug, Default)]
pub struct HttpServer {
    router: Arc<CalcRouter>,
}

impl HttpServer {
    /// Creates a new HTTP server.
    pub fn new() -> Self {
        Self {
            router: Arc::new(CalcRouter::new()),
        }
    }

    /// Binds `addr` and serves connections until the process exits.
    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CalcError::Transport(format!("Failed to bind to {}: {}", addr, e)))?;
        self.serve(listener).await
    }

    /// Serves connections from an already-bound listener.
    ///
    /// Tests bind to port 0 themselves and pass the listener in so the
    /// chosen port is known before the accept loop starts.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener
            .local_addr()
            .map_err(|e| CalcError::Transport(format!("Failed to get local address: {}", e)))?;
        tracing::info!("HTTP server listening on {}", local_addr);

        loop {
            let (stream, _) = listener
                .accept()
                .await
                .map_err(|e| CalcError::Transport(format!("Failed to accept connection: {}", e)))?;

            let io = TokioIo::new(stream);
            let router = self.router.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req: HyperRequest| {
                    let router = router.clone();
                    async move { Ok::<_, Infallible>(router.handle(req).await) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::error!("Error serving connection: {}", err);
                }
            });
        }
    }
}
