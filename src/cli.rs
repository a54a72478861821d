use clap::{Parser, Subcommand};

use crate::commands::{add, categories, export, import, list, show, sync, tui};

#[derive(Debug, Parser)]
#[command(name = "qm")]
#[command(about = "Quote Manager CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ランダムに名言を1件表示
    Show(show::Args),

    /// 名言を追加
    Add(add::Args),

    /// 名言の一覧（カテゴリで絞り込み）
    List(list::Args),

    /// カテゴリ一覧
    Categories(categories::Args),

    /// JSON ファイルへエクスポート
    Export(export::Args),

    /// JSON ファイルからインポート
    Import(import::Args),

    /// サーバーと同期
    Sync(sync::Args),

    /// 対話型ビューアを起動
    Tui(tui::Args),
}
