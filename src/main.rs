//! # sha256-digest CLI entry point
//!
//! Hashes its single argument and prints `0x` followed by 64 lowercase hex
//! digits. The argument is always the message, even when it looks like a
//! flag. Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print the SHA-256 digest of MESSAGE.
#[derive(Parser, Debug)]
#[command(
    name = "sha256-digest",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Message to hash; its raw bytes are digested as-is.
    #[arg(allow_hyphen_values = true)]
    message: OsString,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let bytes = cli.message.as_encoded_bytes();
    tracing::debug!(len = bytes.len(), "hashing argument");

    let digest = match sha256_digest::digest(bytes) {
        Ok(digest) => digest,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{digest:#x}") {
        tracing::error!("failed to write digest: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
