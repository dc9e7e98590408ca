//! Generate an HTML report from an MLTS benchmark CSV log
//!
//! Usage: generate-result <INPUT> <OUTPUT>

use anyhow::Result;
use clap::Parser;
use mlts_cli::commands::GenerateResultArgs;

fn main() -> Result<()> {
    mlts_cli::init_logging();
    GenerateResultArgs::parse().execute()
}
