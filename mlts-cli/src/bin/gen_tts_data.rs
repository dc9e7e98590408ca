//! Convert TTS benchmark vectors from CSV to raw float32 files
//!
//! Usage: gen-tts-data <INPUT_CSV> <OUTPUT_CSV> <OUTPUT_DIR>

use anyhow::Result;
use clap::Parser;
use mlts_cli::commands::GenTtsDataArgs;

fn main() -> Result<()> {
    mlts_cli::init_logging();
    GenTtsDataArgs::parse().execute()
}
