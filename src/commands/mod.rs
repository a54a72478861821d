use crate::app::QuoteApp;
use crate::cli::{Cli, Command};
use crate::config::QmConfig;
use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
use crate::sync::SyncAgent;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Show(args) => show::run(args).await,
        Command::Add(args) => add::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Categories(args) => categories::run(args).await,
        Command::Export(args) => export::run(args).await,
        Command::Import(args) => import::run(args).await,
        Command::Sync(args) => sync::run(args).await,
        Command::Tui(args) => tui::run(args).await,
    }
}

pub mod add;
pub mod categories;
pub mod export;
pub mod import;
pub mod list;
pub mod show;
pub mod sync;
pub mod tui;

/// CLI 実行時のセッション
///
/// セッションスロットはプロセス内のみ（コマンド終了で破棄）。
pub(crate) type CliSession = QuoteApp<FileKeyValueStore, MemoryKeyValueStore>;

/// 設定を読み込み、永続ストレージを開く
pub(crate) fn open_session() -> Result<(QmConfig, CliSession), String> {
    let config = QmConfig::load().map_err(|e| e.to_string())?;
    let durable = FileKeyValueStore::open(config.storage_path()).map_err(|e| e.to_string())?;
    tracing::debug!(path = %durable.path().display(), "opened storage");
    let agent = SyncAgent::from_config(&config);
    let session = QuoteApp::new(durable, MemoryKeyValueStore::new(), agent);
    Ok((config, session))
}
