//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binaries, benches and
//! integration tests can write `blockfall::core::GameState` and friends.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

/// Send `log` output to `path` (appending).
///
/// The terminal is the game screen, so the binaries only log when a file is
/// given. `RUST_LOG` filters as usual and defaults to `info`.
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
