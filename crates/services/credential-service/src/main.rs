//! Credential Service - interactive credential directory.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::io;

use credential_service_lib::{commands, config::CredentialServiceConfig};

#[derive(Parser)]
#[command(name = "credential-service")]
#[command(about = "In-memory credential directory backed by Argon2id")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell reading commands from stdin
    Shell {
        /// Print the reason when a registration is refused
        #[arg(long)]
        explain: bool,
    },
    /// Derive an Argon2id hash for a password
    Hash {
        password: String,
    },
    /// Check a password against an encoded hash (exit status 1 on mismatch)
    Verify {
        hash: String,
        password: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = CredentialServiceConfig::from_env();
    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!("Configuration loaded: {:?}", config);

    let result = match cli.command {
        Commands::Shell { explain } => {
            credential_service_lib::run_shell(config, explain).await.map(|_| true)
        }
        Commands::Hash { password } => commands::hash(&config, &password, &mut io::stdout()),
        Commands::Verify { hash, password } => {
            commands::verify(&config, &hash, &password, &mut io::stdout())
        }
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {}", e.user_message());
    }
    std::process::exit(commands::exit_code(&result));
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };

    // Logs go to stderr so stdout stays clean for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
