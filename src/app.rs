//! アプリケーションセッション
//!
//! ストア・セッションスロット・フィルタ・フォーム・同期エージェントを束ね、
//! 利用者操作ごとにストアを更新して関連する表示を描き直す。

use crate::error::Result;
use crate::filter::CategoryFilter;
use crate::form::{QuoteForm, SubmitOutcome};
use crate::quote::Quote;
use crate::render::{self, RenderPort};
use crate::storage::KeyValueStore;
use crate::store::QuoteStore;
use crate::sync::{merge, FetchedBatch, MergeReport, SyncAgent};
use crate::transfer;
use rand::Rng;
use std::path::Path;

/// アプリケーションセッション
///
/// - `D`: 永続スロット
/// - `E`: セッションスロット
pub struct QuoteApp<D: KeyValueStore, E: KeyValueStore> {
    store: QuoteStore<D>,
    session: E,
    filter: CategoryFilter,
    form: QuoteForm,
    agent: SyncAgent,
}

impl<D: KeyValueStore, E: KeyValueStore> QuoteApp<D, E> {
    /// 永続スロットからストアを復元してセッションを作成
    pub fn new(durable: D, session: E, agent: SyncAgent) -> Self {
        Self {
            store: QuoteStore::load(durable),
            session,
            filter: CategoryFilter::new(),
            form: QuoteForm::new(),
            agent,
        }
    }

    pub fn store(&self) -> &QuoteStore<D> {
        &self.store
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuoteForm {
        &mut self.form
    }

    pub fn agent(&self) -> &SyncAgent {
        &self.agent
    }

    /// 起動時の初期表示
    ///
    /// 1. ランダムに1件表示
    /// 2. カテゴリ選択肢を作成し、保存済みの選択があれば再適用
    /// 3. セッションに最後の表示があれば再表示
    pub fn start<R: Rng + ?Sized>(&mut self, port: &mut dyn RenderPort, rng: &mut R) -> Result<()> {
        self.show_random(port, rng)?;
        self.filter.rebuild(&self.store, port);
        self.filter.restore(&mut self.store, port)?;
        render::restore_last_viewed(&self.session, port);
        Ok(())
    }

    /// ランダムに1件表示
    pub fn show_random<R: Rng + ?Sized>(
        &mut self,
        port: &mut dyn RenderPort,
        rng: &mut R,
    ) -> Result<Option<Quote>> {
        render::show_random(&self.store, &mut self.session, port, rng)
    }

    /// カテゴリ選択肢を作り直す
    pub fn refresh_categories(&mut self, port: &mut dyn RenderPort) {
        self.filter.rebuild(&self.store, port);
    }

    /// カテゴリを選択して一覧を描画
    pub fn select_category(&mut self, category: &str, port: &mut dyn RenderPort) -> Result<()> {
        self.filter.select(category, &mut self.store, port)
    }

    /// 保存済みのカテゴリ選択を適用（無ければ全件）
    pub fn show_selected(&mut self, port: &mut dyn RenderPort) -> Result<()> {
        self.filter.rebuild(&self.store, port);
        if !self.filter.restore(&mut self.store, port)? {
            self.filter.apply(&self.store, port);
        }
        Ok(())
    }

    /// フォームの内容を送信
    pub fn submit(&mut self, port: &mut dyn RenderPort) -> Result<SubmitOutcome> {
        self.form.submit(&mut self.store, &mut self.filter, port)
    }

    /// 本文・カテゴリを指定して送信
    pub fn add(
        &mut self,
        text: &str,
        category: &str,
        port: &mut dyn RenderPort,
    ) -> Result<SubmitOutcome> {
        self.form.text = text.to_string();
        self.form.category = category.to_string();
        self.submit(port)
    }

    /// ファイルからインポート
    pub fn import_file(&mut self, path: &Path, port: &mut dyn RenderPort) -> Result<usize> {
        transfer::import_from_file(path, &mut self.store, &mut self.filter, port)
    }

    /// ストア全体をファイルへエクスポート
    pub fn export_file(&self, path: &Path) -> Result<()> {
        transfer::export_to_file(self.store.quotes(), path)
    }

    /// リモート一覧をマージして表示を更新
    ///
    /// 1件以上追加された場合のみ通知する。
    pub fn apply_remote(
        &mut self,
        remote: Vec<Quote>,
        port: &mut dyn RenderPort,
    ) -> Result<MergeReport> {
        let report = merge(remote, &mut self.store)?;
        self.after_merge(report, port);
        Ok(report)
    }

    /// バックグラウンド取得の結果を適用（適用後にガードを解放）
    pub fn apply_batch(
        &mut self,
        batch: FetchedBatch,
        port: &mut dyn RenderPort,
    ) -> Result<MergeReport> {
        let FetchedBatch { quotes, guard } = batch;
        guard.merging();
        let result = self.apply_remote(quotes, port);
        drop(guard);
        result
    }

    /// 取得 → マージ → 表示更新を1回実行（別の同期が実行中なら None）
    pub async fn sync_now(&mut self, port: &mut dyn RenderPort) -> Result<Option<MergeReport>> {
        let report = self.agent.run_cycle(&mut self.store).await?;
        if let Some(report) = report {
            self.after_merge(report, port);
        }
        Ok(report)
    }

    fn after_merge(&mut self, report: MergeReport, port: &mut dyn RenderPort) {
        if report.added == 0 {
            return;
        }
        self.filter.rebuild(&self.store, port);
        self.filter.apply(&self.store, port);
        if let Some(notice) = report.notice() {
            port.notify(notice);
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
