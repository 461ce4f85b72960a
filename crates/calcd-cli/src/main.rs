//! # calcd Entry Point
//!
//! Binary for the calculator HTTP service. Parses command-line flags,
//! installs the logging stack, and runs the server until the process exits.
//!
//! ## Usage
//!
//! ```bash
//! # Serve on the default port (PORT env var, else 3000)
//! calcd
//!
//! # Explicit port and log directory
//! calcd --port 8080 --log-dir /var/log/calcd
//! ```

use std::net::SocketAddr;

use anyhow::Result;
use argh::FromArgs;

mod logging;

/// calcd - HTTP calculator service
#[derive(FromArgs)]
struct Cli {
    /// address to bind the HTTP server to
    ///
    /// Defaults to "0.0.0.0".
    #[argh(option, default = "\"0.0.0.0\".into()")]
    host: String,

    /// port to listen on
    ///
    /// Defaults to the PORT environment variable, or 3000 when unset.
    #[argh(option, short = 'p', default = "default_port()")]
    port: u16,

    /// directory for the combined and error log files
    ///
    /// Defaults to "logs". Created at startup if it does not exist.
    #[argh(option, long = "log-dir", default = "\"logs\".into()")]
    log_dir: String,
}

/// Reads the PORT environment variable, falling back to 3000.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // The guards keep the file appenders alive; dropping them at process
    // exit flushes any buffered log lines.
    let _guards = logging::init(&cli.log_dir)?;

    tracing::info!("Starting calcd");
    tracing::info!("Log directory: {}", cli.log_dir);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}:{}: {}", cli.host, cli.port, e))?;

    calcd_server::HttpServer::new().run(addr).await?;

    Ok(())
}
