//! 名言ストア
//!
//! 挿入順の名言一覧を保持し、変更のたびに永続スロットへ全件を書き込む。
//! 変更は `append` / `append_all` のみ（更新・削除は無い）。

use crate::error::Result;
use crate::quote::Quote;
use crate::storage::{KeyValueStore, QUOTES_KEY};

/// 名言ストア
pub struct QuoteStore<S: KeyValueStore> {
    storage: S,
    quotes: Vec<Quote>,
}

impl<S: KeyValueStore> QuoteStore<S> {
    /// 永続スロットから読み込む
    ///
    /// - 未保存なら初期データ（3件）
    /// - 壊れた値なら警告を出して初期データ（次の変更で上書きされる）
    pub fn load(storage: S) -> Self {
        let quotes = match storage.get(QUOTES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!("stored quotes are unreadable ({e}); falling back to seed quotes");
                    Quote::seed()
                }
            },
            None => Quote::seed(),
        };

        Self { storage, quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// 末尾に1件追加して永続化
    pub fn append(&mut self, quote: Quote) -> Result<()> {
        self.quotes.push(quote);
        self.persist()
    }

    /// 末尾にまとめて追加して永続化（1回だけ書き込む）
    ///
    /// 追加件数を返す。0件なら書き込みも行わない。
    pub fn append_all(&mut self, quotes: impl IntoIterator<Item = Quote>) -> Result<usize> {
        let before = self.quotes.len();
        self.quotes.extend(quotes);
        let added = self.quotes.len() - before;
        if added > 0 {
            self.persist()?;
        }
        Ok(added)
    }

    /// 永続スロット（`selectedCategory` 等の他キーも同じストレージ）
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let serialized = serde_json::to_string(&self.quotes)?;
        self.storage.set(QUOTES_KEY, serialized)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
