mod app;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod form;
mod http;
mod logging;
mod output;
mod quote;
mod render;
mod storage;
mod store;
mod sync;
mod transfer;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // TUI は代替スクリーンを使うため、ログはファイルへ出す（commands::tui で初期化）
    if !matches!(cli.command, cli::Command::Tui(_)) {
        logging::init_stderr();
    }

    if let Err(err) = commands::dispatch(cli).await {
        // 通知済みのエラーは空文字で返る
        if !err.is_empty() {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}
