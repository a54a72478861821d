//! 同期エージェント
//!
//! ## 状態遷移
//!
//! ```text
//!   Idle ──try_begin()──▶ Fetching ──merging()──▶ Merging
//!    ▲                                              │
//!    └──────────────── SyncGuard drop ◀─────────────┘
//! ```
//!
//! 同時に走る同期は1つだけ。実行中に要求された同期はスキップする。

use super::merge::{merge, MergeReport};
use super::remote::{HttpRemote, RemoteQuotes};
use crate::config::QmConfig;
use crate::error::Result;
use crate::quote::Quote;
use crate::storage::KeyValueStore;
use crate::store::QuoteStore;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const IDLE: u8 = 0;
const FETCHING: u8 = 1;
const MERGING: u8 = 2;

/// 同期の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Fetching,
    Merging,
}

/// 実行中の同期を表すガード（drop で Idle に戻る）
#[derive(Debug)]
pub struct SyncGuard {
    state: Arc<AtomicU8>,
}

impl SyncGuard {
    /// Merging へ遷移
    pub fn merging(&self) {
        self.state.store(MERGING, Ordering::SeqCst);
    }
}

impl Drop for SyncGuard {
    fn drop(&mut self) {
        self.state.store(IDLE, Ordering::SeqCst);
    }
}

/// 取得済みのリモート一覧
///
/// ガードを持ち回し、受け取り側でマージし終えるまで次の同期を止める。
#[derive(Debug)]
pub struct FetchedBatch {
    pub quotes: Vec<Quote>,
    pub guard: SyncGuard,
}

/// 同期エージェント
#[derive(Clone)]
pub struct SyncAgent {
    remote: Option<Arc<dyn RemoteQuotes>>,
    state: Arc<AtomicU8>,
    interval: Duration,
}

impl SyncAgent {
    pub fn new(remote: Arc<dyn RemoteQuotes>, interval: Duration) -> Self {
        Self {
            remote: Some(remote),
            state: Arc::new(AtomicU8::new(IDLE)),
            interval,
        }
    }

    /// エンドポイント未設定時の無効なエージェント
    pub fn disabled(interval: Duration) -> Self {
        Self {
            remote: None,
            state: Arc::new(AtomicU8::new(IDLE)),
            interval,
        }
    }

    /// 設定からエージェントを構築
    pub fn from_config(config: &QmConfig) -> Self {
        match &config.sync.endpoint {
            Some(endpoint) => {
                let remote = HttpRemote::new(&config.http, endpoint.clone());
                Self::new(Arc::new(remote), config.sync.interval)
            }
            None => Self::disabled(config.sync.interval),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> SyncState {
        match self.state.load(Ordering::SeqCst) {
            FETCHING => SyncState::Fetching,
            MERGING => SyncState::Merging,
            _ => SyncState::Idle,
        }
    }

    /// 同期を開始（実行中なら None）
    pub fn try_begin(&self) -> Option<SyncGuard> {
        self.state
            .compare_exchange(IDLE, FETCHING, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SyncGuard {
                state: Arc::clone(&self.state),
            })
    }

    /// リモート一覧を取得
    ///
    /// 失敗は警告ログのみで、空の一覧として扱う。
    pub async fn fetch_remote(&self) -> Vec<Quote> {
        let Some(remote) = &self.remote else {
            return Vec::new();
        };

        match remote.list().await {
            Ok(quotes) => {
                tracing::debug!(count = quotes.len(), "fetched remote quotes");
                quotes
            }
            Err(e) if e.is_transient() => {
                tracing::warn!("sync fetch failed: {e}");
                Vec::new()
            }
            Err(e) => {
                tracing::error!("sync fetch failed: {e}");
                Vec::new()
            }
        }
    }

    /// 追加した名言をリモートへ送信（失敗はログのみ）
    pub async fn push(&self, quote: &Quote) {
        let Some(remote) = &self.remote else {
            return;
        };

        match remote.create(quote).await {
            Ok(()) => tracing::debug!("pushed quote to server"),
            Err(e) if e.is_transient() => tracing::warn!("sync push failed: {e}"),
            Err(e) => tracing::error!("sync push failed: {e}"),
        }
    }

    /// 取得 → マージを1回実行
    ///
    /// 無効または別の同期が実行中なら Ok(None)。
    pub async fn run_cycle<S: KeyValueStore>(
        &self,
        store: &mut QuoteStore<S>,
    ) -> Result<Option<MergeReport>> {
        if !self.is_enabled() {
            tracing::debug!("sync disabled; no endpoint configured");
            return Ok(None);
        }

        let Some(guard) = self.try_begin() else {
            tracing::debug!("sync already in flight; skipping");
            return Ok(None);
        };

        let quotes = self.fetch_remote().await;
        guard.merging();
        let report = merge(quotes, store)?;
        drop(guard);

        if report.added > 0 {
            tracing::info!(added = report.added, "merged remote quotes");
        }
        Ok(Some(report))
    }

    /// 取得をバックグラウンドで開始し、結果をチャネルへ送る
    ///
    /// 開始した場合は true。
    pub fn spawn_fetch(&self, tx: UnboundedSender<FetchedBatch>) -> bool {
        if !self.is_enabled() {
            return false;
        }

        let Some(guard) = self.try_begin() else {
            tracing::debug!("sync already in flight; skipping");
            return false;
        };

        let agent = self.clone();
        tokio::spawn(async move {
            let quotes = agent.fetch_remote().await;
            // 受信側が閉じていればガードごと破棄される
            let _ = tx.send(FetchedBatch { quotes, guard });
        });
        true
    }

    /// 送信をバックグラウンドで行い、続けて取得する
    ///
    /// 送信後に別の同期が実行中なら取得はスキップする。
    pub fn spawn_push(&self, quote: Quote, tx: UnboundedSender<FetchedBatch>) {
        if !self.is_enabled() {
            return;
        }

        let agent = self.clone();
        tokio::spawn(async move {
            agent.push(&quote).await;
            let Some(guard) = agent.try_begin() else {
                tracing::debug!("sync already in flight; skipping");
                return;
            };
            let quotes = agent.fetch_remote().await;
            let _ = tx.send(FetchedBatch { quotes, guard });
        });
    }
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
