//! qm import コマンド
//!
//! JSON 配列ファイルから名言を追加する（重複排除はしない）。

use super::open_session;
use crate::output::CommandSummary;
use crate::render::ConsolePort;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON file containing an array of {"text", "category"} objects
    pub file: PathBuf,
}

pub async fn run(args: Args) -> Result<(), String> {
    let (_, mut session) = open_session()?;
    // 成功は要約行のみで伝える
    let mut port = ConsolePort::errors_only();

    let added = session
        .import_file(&args.file, &mut port)
        .map_err(|e| e.to_string())?;

    println!("{}", CommandSummary::import(added));
    Ok(())
}
