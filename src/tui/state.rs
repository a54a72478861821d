//! 名言ビューア TUI の状態管理

use super::port::TuiPort;
use crate::quote::Quote;

/// 入力フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormField {
    Text,
    Category,
}

impl FormField {
    pub(super) fn toggle(self) -> Self {
        match self {
            FormField::Text => FormField::Category,
            FormField::Category => FormField::Text,
        }
    }
}

/// 画面モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// 閲覧
    Browse,
    /// 追加フォーム入力中（フォーカス中の項目）
    AddForm(FormField),
    /// インポートするファイルパスの入力中
    ImportPrompt,
}

/// キー処理の結果、イベントループ側で行う非同期処理
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    None,
    /// 取得タスクを起動
    SyncNow,
    /// 追加した名言をサーバーへ送信
    Push(Quote),
}

/// アプリケーション状態
pub(super) struct TuiState {
    pub(super) mode: Mode,
    pub(super) port: TuiPort,
    pub(super) import_path: String,
    pub(super) should_quit: bool,
}

impl TuiState {
    pub(super) fn new() -> Self {
        Self {
            mode: Mode::Browse,
            port: TuiPort::new(),
            import_path: String::new(),
            should_quit: false,
        }
    }
}
