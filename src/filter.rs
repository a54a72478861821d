//! カテゴリフィルタ
//!
//! ストアから重複なしのカテゴリ一覧（先頭出現順）を導出し、
//! 選択を永続化して表示を絞り込む。

use crate::error::Result;
use crate::quote::Quote;
use crate::render::{render_list, CategoryOption, RenderPort};
use crate::storage::{KeyValueStore, SELECTED_CATEGORY_KEY};
use crate::store::QuoteStore;
use std::collections::HashSet;

/// 「絞り込みなし」を表す番兵値
pub const ALL_CATEGORIES: &str = "all";

/// 番兵値 + 先頭出現順の重複なしカテゴリ一覧
///
/// 番兵値と同名のカテゴリは選択肢に重複させない。
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::from([ALL_CATEGORIES]);
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            result.push(quote.category.clone());
        }
    }
    result
}

/// 選択カテゴリで絞り込む（番兵値なら全件）
pub fn filtered<'a>(quotes: &'a [Quote], selection: &str) -> Vec<&'a Quote> {
    if selection == ALL_CATEGORIES {
        return quotes.iter().collect();
    }
    quotes.iter().filter(|q| q.category == selection).collect()
}

/// カテゴリフィルタの状態
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    options: Vec<String>,
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self {
            options: vec![ALL_CATEGORIES.to_string()],
            selected: ALL_CATEGORIES.to_string(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// 選択肢をストアから作り直す
    ///
    /// 現在の選択が選択肢から消えた場合は番兵値に戻す（永続値は変更しない）。
    pub fn rebuild<S: KeyValueStore>(&mut self, store: &QuoteStore<S>, port: &mut dyn RenderPort) {
        self.options = categories(store.quotes());
        if !self.options.contains(&self.selected) {
            self.selected = ALL_CATEGORIES.to_string();
        }
        self.publish(port);
    }

    /// 選択肢と現在の選択をポートへ反映
    fn publish(&self, port: &mut dyn RenderPort) {
        let options: Vec<CategoryOption> =
            self.options.iter().map(CategoryOption::new).collect();
        port.set_category_options(&options, &self.selected);
    }

    /// カテゴリを選択して永続化し、選択表示と絞り込んだ一覧を描画
    pub fn select<S: KeyValueStore>(
        &mut self,
        category: &str,
        store: &mut QuoteStore<S>,
        port: &mut dyn RenderPort,
    ) -> Result<()> {
        store
            .storage_mut()
            .set(SELECTED_CATEGORY_KEY, category.to_string())?;
        self.selected = category.to_string();
        self.publish(port);
        self.apply(store, port);
        Ok(())
    }

    /// 現在の選択で一覧を描画（永続化しない）
    pub fn apply<S: KeyValueStore>(&self, store: &QuoteStore<S>, port: &mut dyn RenderPort) {
        render_list(filtered(store.quotes(), &self.selected), port);
    }

    /// 永続化された選択があれば再適用する
    ///
    /// 適用した場合は true。
    pub fn restore<S: KeyValueStore>(
        &mut self,
        store: &mut QuoteStore<S>,
        port: &mut dyn RenderPort,
    ) -> Result<bool> {
        let Some(saved) = store.storage().get(SELECTED_CATEGORY_KEY) else {
            return Ok(false);
        };
        self.select(&saved, store, port)?;
        Ok(true)
    }

    /// 選択肢を `step` だけ移動した先のカテゴリ（端で循環）
    pub fn neighbor(&self, step: isize) -> &str {
        let len = self.options.len() as isize;
        if len == 0 {
            return ALL_CATEGORIES;
        }
        let current = self
            .options
            .iter()
            .position(|o| *o == self.selected)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        &self.options[next]
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
