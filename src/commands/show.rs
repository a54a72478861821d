//! qm show コマンド
//!
//! ストアからランダムに1件表示する。

use super::open_session;
use crate::render::ConsolePort;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args) -> Result<(), String> {
    let (_, mut session) = open_session()?;
    let mut port = ConsolePort::new();

    session
        .show_random(&mut port, &mut rand::thread_rng())
        .map_err(|e| e.to_string())?;

    Ok(())
}
