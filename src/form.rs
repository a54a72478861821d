//! 名言追加フォーム

use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::quote::Quote;
use crate::render::{Notice, RenderPort};
use crate::storage::KeyValueStore;
use crate::store::QuoteStore;

/// 入力不足時のメッセージ
pub const VALIDATION_MESSAGE: &str = "Please enter both quote text and category.";

/// 追加成功時のメッセージ
pub const ADDED_MESSAGE: &str = "Quote added successfully!";

/// 送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 追加された名言（呼び出し側で同期 push を行う）
    Added(Quote),
    /// 入力不足（ストアは変更されない）
    Invalid,
}

/// フォーム入力欄の状態
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub text: String,
    pub category: String,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力欄を空にする
    pub fn clear(&mut self) {
        self.text.clear();
        self.category.clear();
    }

    /// 入力内容を送信
    ///
    /// 本文・カテゴリのどちらかが空なら検証エラーを通知して何も変更しない。
    /// 入力はそのまま保存する（空白も含めて構造一致の対象）。
    /// 成功時はストアへ追加し、入力欄をクリアし、
    /// カテゴリ選択肢を作り直してから成功を通知する。
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut QuoteStore<S>,
        filter: &mut CategoryFilter,
        port: &mut dyn RenderPort,
    ) -> Result<SubmitOutcome> {
        if self.text.is_empty() || self.category.is_empty() {
            port.notify(Notice::error(VALIDATION_MESSAGE));
            return Ok(SubmitOutcome::Invalid);
        }

        let quote = Quote::new(self.text.as_str(), self.category.as_str());
        store.append(quote.clone())?;

        self.clear();
        filter.rebuild(store, port);
        port.notify(Notice::success(ADDED_MESSAGE));

        Ok(SubmitOutcome::Added(quote))
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
