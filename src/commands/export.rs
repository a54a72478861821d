//! qm export コマンド

use super::open_session;
use crate::transfer::DEFAULT_EXPORT_FILE;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
    pub output: PathBuf,
}

pub async fn run(args: Args) -> Result<(), String> {
    let (_, session) = open_session()?;

    session
        .export_file(&args.output)
        .map_err(|e| e.to_string())?;

    println!(
        "{} Exported {} quote(s) to {}",
        "✓".green(),
        session.store().len(),
        args.output.display()
    );
    Ok(())
}
