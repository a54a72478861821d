//! qm tui コマンド

use super::open_session;
use crate::logging;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args) -> Result<(), String> {
    let (config, session) = open_session()?;
    logging::init_file(&config.log_path());

    crate::tui::run(session).await.map_err(|e| e.to_string())
}
