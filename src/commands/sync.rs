//! qm sync コマンド
//!
//! サーバーの一覧を取得し、ローカルに無い名言を追加する。
//! `--watch` では設定間隔で繰り返し、Ctrl-C で終了する。

use super::{open_session, CliSession};
use crate::output::{spinner, CommandSummary};
use crate::render::ConsolePort;
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Keep syncing at the configured interval until interrupted
    #[arg(long)]
    pub watch: bool,
}

const NOT_CONFIGURED: &str =
    "Sync endpoint is not configured. Set QM_SYNC_URL or [sync] endpoint in config.toml";

pub async fn run(args: Args) -> Result<(), String> {
    let (config, mut session) = open_session()?;

    if !session.agent().is_enabled() {
        return Err(NOT_CONFIGURED.to_string());
    }

    if let Some(endpoint) = &config.sync.endpoint {
        println!("{} {}", "Endpoint:".dimmed(), endpoint);
    }

    if !args.watch {
        return sync_once(&mut session).await;
    }

    println!(
        "{}",
        format!(
            "Watching every {}s (Ctrl-C to stop)",
            session.agent().interval().as_secs()
        )
        .dimmed()
    );

    let mut ticker = tokio::time::interval(session.agent().interval());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = sync_once(&mut session).await {
                    // 1サイクルの失敗で監視を止めない
                    tracing::warn!("sync cycle failed: {e}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    Ok(())
}

async fn sync_once(session: &mut CliSession) -> Result<(), String> {
    let mut port = ConsolePort::errors_only();

    let pb = spinner("Syncing with server...");
    let result = session.sync_now(&mut port).await;
    pb.finish_and_clear();

    let report = result.map_err(|e| e.to_string())?;
    println!("{}", CommandSummary::sync(report));
    Ok(())
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
