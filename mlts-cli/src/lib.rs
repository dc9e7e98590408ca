//! MLTS command-line tools
//!
//! Backs the `generate-result` and `gen-tts-data` binaries.

pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};

/// Initialise logging. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    // A second initialisation (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
