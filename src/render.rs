//! 描画ポートと表示処理
//!
//! コアは画面要素を直接触らず、`RenderPort` を通して表示する。
//! CLI では `ConsolePort`、TUI では `tui` 側の実装を注入する。

mod console;

pub use console::ConsolePort;

use crate::error::Result;
use crate::quote::Quote;
use crate::storage::{KeyValueStore, LAST_VIEWED_KEY};
use crate::store::QuoteStore;
use rand::Rng;

/// ストアが空のときの表示
pub const EMPTY_PLACEHOLDER: &str = "No quotes available. Add one to get started.";

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// 利用者向けの一時的な通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// カテゴリ選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// 選択値（カテゴリ名そのもの）
    pub value: String,
    /// 表示ラベル（先頭1文字を大文字化）
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let label = option_label(&value);
        Self { value, label }
    }
}

/// 描画ポート
pub trait RenderPort {
    /// 表示領域に1件表示（既存表示は置き換え）
    fn show_quote(&mut self, quote: &Quote);

    /// 表示領域にメッセージを表示（既存表示は置き換え）
    fn show_placeholder(&mut self, message: &str);

    /// 表示領域をクリア
    fn clear_quotes(&mut self);

    /// 表示領域の末尾に1件追加
    fn append_quote(&mut self, quote: &Quote);

    /// カテゴリ選択肢を置き換え
    fn set_category_options(&mut self, options: &[CategoryOption], selected: &str);

    /// 通知を表示
    fn notify(&mut self, notice: Notice);
}

/// 先頭1文字を大文字にした表示ラベル
pub fn option_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// ランダムに1件表示し、セッションスロットへ記録する
///
/// ストアが空の場合はプレースホルダーを表示して None を返す
/// （セッションスロットは変更しない）。
pub fn show_random<S, E, R>(
    store: &QuoteStore<S>,
    session: &mut E,
    port: &mut dyn RenderPort,
    rng: &mut R,
) -> Result<Option<Quote>>
where
    S: KeyValueStore,
    E: KeyValueStore,
    R: Rng + ?Sized,
{
    if store.is_empty() {
        port.show_placeholder(EMPTY_PLACEHOLDER);
        return Ok(None);
    }

    let index = rng.gen_range(0..store.len());
    let Some(quote) = store.get(index).cloned() else {
        return Ok(None);
    };

    port.show_quote(&quote);
    session.set(LAST_VIEWED_KEY, serde_json::to_string(&quote)?)?;

    Ok(Some(quote))
}

/// 表示領域をクリアして順番に描画
pub fn render_list<'a>(quotes: impl IntoIterator<Item = &'a Quote>, port: &mut dyn RenderPort) {
    port.clear_quotes();
    for quote in quotes {
        port.append_quote(quote);
    }
}

/// セッションスロットに最後の表示があれば再表示
pub fn restore_last_viewed<E: KeyValueStore>(
    session: &E,
    port: &mut dyn RenderPort,
) -> Option<Quote> {
    let raw = session.get(LAST_VIEWED_KEY)?;
    match serde_json::from_str::<Quote>(&raw) {
        Ok(quote) => {
            port.show_quote(&quote);
            Some(quote)
        }
        Err(e) => {
            tracing::debug!("ignoring unreadable last viewed quote: {e}");
            None
        }
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
