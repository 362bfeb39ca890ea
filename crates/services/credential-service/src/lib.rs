//! Credential Service Library
//!
//! An in-memory credential directory: register users by email and
//! password, authenticate them against Argon2id hashes. The directory lives
//! as long as the process; nothing is persisted.

pub mod commands;
pub mod config;
pub mod service;
pub mod shell;

use std::sync::Arc;

use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

use crate::config::CredentialServiceConfig;
use crate::service::CredentialDirectory;
use crate::shell::Shell;
use common::AppResult;

/// Run the interactive shell on stdin/stdout with the given configuration.
pub async fn run_shell(config: CredentialServiceConfig, explain: bool) -> AppResult<()> {
    let directory = Arc::new(CredentialDirectory::new(config.build_hasher()?));
    let params = directory.hasher().params();
    info!(
        "{} ready (argon2id m={} t={} p={})",
        config.service.service_name, params.memory_kib, params.iterations, params.parallelism
    );

    Shell::new(directory)
        .explain(explain)
        .run(BufReader::new(stdin()), stdout())
        .await
}
