//! One-shot `hash` and `verify` commands.
//!
//! Each returns `Ok(true)` when the command succeeded; `exit_code` maps the
//! result onto the process exit status.

use std::io::Write;

use crate::config::CredentialServiceConfig;
use common::AppResult;
use domain::{CredentialHasher, Password};

/// Derive a fresh hash for `password` and write it as one line.
pub fn hash<W: Write>(
    config: &CredentialServiceConfig,
    password: &str,
    out: &mut W,
) -> AppResult<bool> {
    let hash = config.build_hasher()?.derive_hash(password)?;
    writeln!(out, "{}", hash.into_string())?;
    Ok(true)
}

/// Check `password` against an encoded hash, writing `true` or `false`.
///
/// A mismatch is not an error: it yields `Ok(false)`.
pub fn verify<W: Write>(
    config: &CredentialServiceConfig,
    hash: &str,
    password: &str,
    out: &mut W,
) -> AppResult<bool> {
    let matched = config
        .build_hasher()?
        .verify(&Password::from_hash(hash), password);
    writeln!(out, "{}", matched)?;
    Ok(matched)
}

/// Exit status for a command result: 0 on success, 1 on mismatch or error.
pub fn exit_code(result: &AppResult<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}
