//! qm add コマンド
//!
//! 名言を追加し、同期が有効ならサーバーへ送信してから1回同期する。

use super::open_session;
use crate::form::SubmitOutcome;
use crate::output::{spinner, CommandSummary};
use crate::render::ConsolePort;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Quote text
    pub text: String,

    /// Category of the quote
    #[arg(short, long)]
    pub category: String,
}

pub async fn run(args: Args) -> Result<(), String> {
    let (_, mut session) = open_session()?;
    let mut port = ConsolePort::notices_only();

    let quote = match session
        .add(&args.text, &args.category, &mut port)
        .map_err(|e| e.to_string())?
    {
        SubmitOutcome::Added(quote) => quote,
        // 検証エラーは通知済み
        SubmitOutcome::Invalid => return Err(String::new()),
    };

    if !session.agent().is_enabled() {
        return Ok(());
    }

    let pb = spinner("Syncing with server...");
    session.agent().push(&quote).await;
    let mut sync_port = ConsolePort::errors_only();
    let report = session
        .sync_now(&mut sync_port)
        .await
        .map_err(|e| e.to_string());
    pb.finish_and_clear();

    println!("{}", CommandSummary::sync(report?));
    Ok(())
}
