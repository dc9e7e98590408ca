//! gen-tts-data command implementation

use super::require_file;
use crate::{CliError, CliResult};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Convert TTS model input/output vectors from CSV into raw float32 files
#[derive(Debug, Parser)]
#[command(name = "gen-tts-data", version)]
pub struct GenTtsDataArgs {
    /// Model input CSV file
    #[arg(value_name = "INPUT_CSV")]
    pub input_csv: PathBuf,

    /// Model output CSV file
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_csv: PathBuf,

    /// Directory receiving tts.input and tts.output
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

impl GenTtsDataArgs {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        log::debug!("Arguments: {:?}", self);
        require_file(&self.input_csv)?;
        require_file(&self.output_csv)?;
        if !self.output_dir.is_dir() {
            return Err(CliError::NotADirectory(self.output_dir.display().to_string()).into());
        }

        let files =
            mlts_core::generate_tts_data(&self.input_csv, &self.output_csv, &self.output_dir)
                .context("Failed to generate TTS data")?;

        log::info!(
            "Wrote {} and {}",
            files.input.display(),
            files.output.display()
        );
        Ok(())
    }
}
