//! # Penilaian - Assessment Status Service
//!
//! The main binary for the Penilaian workflow status resolver.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │           apps/penilaian (THE BINARY)         │
//! │                                               │
//! │   ┌─────────────┐          ┌─────────────┐    │
//! │   │     CLI     │          │  HTTP API   │    │
//! │   │   (clap)    │          │   (axum)    │    │
//! │   └──────┬──────┘          └──────┬──────┘    │
//! │          └───────────┬────────────┘           │
//! │                      ▼                        │
//! │             ┌────────────────┐                │
//! │             │ penilaian-core │                │
//! │             │  (THE LOGIC)   │                │
//! │             └────────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! penilaian server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! penilaian table
//! penilaian resolve --session submitted --review needs_revision
//! penilaian batch -f sessions.json --json-mode
//! ```

use clap::Parser;
use penilaian::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // PENILAIAN_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PENILAIAN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "penilaian=debug,penilaian_core=debug,tower_http=debug"
    } else {
        "penilaian=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┌┐┌┬┬  ┌─┐┬┌─┐┌┐┌
  ├─┘├┤ │││││  ├─┤│├─┤│││
  ┴  └─┘┘└┘┴┴─┘┴ ┴┴┴ ┴┘└┘

  Assessment Status Service v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
