//! # Penilaian CLI Module
//!
//! This module implements the CLI interface for Penilaian.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `resolve` - Resolve one session/review pair
//! - `batch` - Resolve a JSON file of session records
//! - `table` - Print the six status descriptors

mod commands;

use crate::config::Config;
use clap::{Parser, Subcommand};
use penilaian_core::PenilaianError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Penilaian - assessment workflow status service
///
/// Reconciles a session status and a review status into one canonical
/// assessment state with its UI permissions.
#[derive(Parser, Debug)]
#[command(name = "penilaian")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "penilaian.toml")]
    pub config: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Resolve one session/review pair
    Resolve {
        /// Session status (in_progress, submitted, resubmitted)
        #[arg(short, long)]
        session: String,

        /// Review status (needs_revision, approved, completed)
        #[arg(short, long)]
        review: Option<String>,

        /// Review stage (passed through unchanged)
        #[arg(long)]
        stage: Option<String>,
    },

    /// Resolve a JSON array of session records from a file
    Batch {
        /// Path to the input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the status descriptor table
    Table,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PenilaianError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            let mut config = Config::load(&cli.config)?.with_env_overrides();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_server(config.server).await
        }
        Some(Commands::Resolve {
            session,
            review,
            stage,
        }) => cmd_resolve(json_mode, &session, review.as_deref(), stage.as_deref()),
        Some(Commands::Batch { file }) => cmd_batch(json_mode, &file),
        Some(Commands::Table) | None => cmd_table(json_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_command() {
        let cli = Cli::try_parse_from([
            "penilaian",
            "--json-mode",
            "resolve",
            "--session",
            "submitted",
            "--review",
            "approved",
        ])
        .expect("parse");
        assert!(cli.json_mode);
        assert!(matches!(
            cli.command,
            Some(Commands::Resolve { ref session, ref review, stage: None })
                if session == "submitted" && review.as_deref() == Some("approved")
        ));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["penilaian", "-q"]).expect("parse");
        assert!(cli.quiet);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("penilaian.toml"));
    }

    #[test]
    fn server_overrides_are_optional() {
        let cli = Cli::try_parse_from(["penilaian", "server", "-p", "9090"]).expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Server { host: None, port: Some(9090) })
        ));
    }
}
