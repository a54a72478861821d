//! TUI の描画ポート
//!
//! コアからの描画呼び出しを表示状態として保持し、`render` が毎フレーム描く。

use crate::quote::Quote;
use crate::render::{CategoryOption, Notice, RenderPort};
use chrono::{DateTime, Duration, Local};

/// 通知の表示時間
const NOTICE_TTL_SECS: i64 = 3;

/// 表示時刻付きの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct StampedNotice {
    pub notice: Notice,
    pub shown_at: DateTime<Local>,
}

/// 表示状態
#[derive(Debug, Default)]
pub(super) struct TuiPort {
    pub(super) display: Vec<Quote>,
    pub(super) placeholder: Option<String>,
    pub(super) options: Vec<CategoryOption>,
    pub(super) selected: String,
    pub(super) notice: Option<StampedNotice>,
}

impl TuiPort {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// 表示時間を過ぎた通知を消す
    pub(super) fn expire_notice(&mut self, now: DateTime<Local>) {
        let ttl = Duration::seconds(NOTICE_TTL_SECS);
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| now.signed_duration_since(n.shown_at) >= ttl);
        if expired {
            self.notice = None;
        }
    }

    /// 選択中カテゴリの位置
    pub(super) fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.selected)
    }
}

impl RenderPort for TuiPort {
    fn show_quote(&mut self, quote: &Quote) {
        self.placeholder = None;
        self.display = vec![quote.clone()];
    }

    fn show_placeholder(&mut self, message: &str) {
        self.display.clear();
        self.placeholder = Some(message.to_string());
    }

    fn clear_quotes(&mut self) {
        self.display.clear();
        self.placeholder = None;
    }

    fn append_quote(&mut self, quote: &Quote) {
        self.display.push(quote.clone());
    }

    fn set_category_options(&mut self, options: &[CategoryOption], selected: &str) {
        self.options = options.to_vec();
        self.selected = selected.to_string();
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(StampedNotice {
            notice,
            shown_at: Local::now(),
        });
    }
}

#[cfg(test)]
#[path = "port_test.rs"]
mod tests;
