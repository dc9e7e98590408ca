//! CLI command implementations

pub mod gen_tts_data;
pub mod generate_result;

pub use gen_tts_data::GenTtsDataArgs;
pub use generate_result::GenerateResultArgs;

use crate::CliError;
use std::path::Path;

/// Fail early with a readable message when an input file is missing
pub(crate) fn require_file(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()))
    }
}
