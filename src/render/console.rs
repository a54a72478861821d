//! CLI 用の描画ポート

use super::{CategoryOption, Notice, NoticeLevel, RenderPort};
use crate::quote::Quote;
use owo_colors::OwoColorize;

/// 出力する内容の範囲
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
    /// 名言と通知をすべて出力
    #[default]
    Full,
    /// 通知のみ（名言は出力しない）
    NoticesOnly,
    /// エラー通知のみ（成功はコマンド側の要約行で伝える）
    ErrorsOnly,
}

/// 標準出力へ描画するポート
#[derive(Debug, Default)]
pub struct ConsolePort {
    mode: ConsoleMode,
    printed_any: bool,
}

impl ConsolePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// `qm add` のようにストア全体を再描画したくないコマンド用
    pub fn notices_only() -> Self {
        Self::with_mode(ConsoleMode::NoticesOnly)
    }

    /// 結果を `CommandSummary` で1行にまとめるコマンド用
    pub fn errors_only() -> Self {
        Self::with_mode(ConsoleMode::ErrorsOnly)
    }

    fn with_mode(mode: ConsoleMode) -> Self {
        Self {
            mode,
            printed_any: false,
        }
    }

    fn shows_quotes(&self) -> bool {
        self.mode == ConsoleMode::Full
    }

    fn shows_notice(&self, level: NoticeLevel) -> bool {
        self.mode != ConsoleMode::ErrorsOnly || level == NoticeLevel::Error
    }

    fn print_quote(&mut self, quote: &Quote) {
        if self.printed_any {
            println!();
        }
        println!("{}", quote.text);
        println!("  {}", format!("— {}", quote.category).italic().dimmed());
        self.printed_any = true;
    }
}

impl RenderPort for ConsolePort {
    fn show_quote(&mut self, quote: &Quote) {
        if !self.shows_quotes() {
            return;
        }
        self.printed_any = false;
        self.print_quote(quote);
    }

    fn show_placeholder(&mut self, message: &str) {
        if !self.shows_quotes() {
            return;
        }
        println!("{}", message.dimmed());
    }

    fn clear_quotes(&mut self) {
        self.printed_any = false;
    }

    fn append_quote(&mut self, quote: &Quote) {
        if !self.shows_quotes() {
            return;
        }
        self.print_quote(quote);
    }

    fn set_category_options(&mut self, _options: &[CategoryOption], _selected: &str) {
        // カテゴリ一覧は `qm categories` で明示的に表示する
    }

    fn notify(&mut self, notice: Notice) {
        if !self.shows_notice(notice.level) {
            return;
        }
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green(), notice.message),
            NoticeLevel::Info => println!("{} {}", "•".yellow(), notice.message),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red(), notice.message),
        }
    }
}
