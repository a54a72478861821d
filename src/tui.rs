//! 名言ビューア TUI
//!
//! 1件表示・カテゴリ切り替え・追加フォーム・インポート/エクスポートを行い、
//! 開いている間は設定間隔で同期する。
//!
//! ## モジュール構成
//!
//! - `port`: 描画ポート（表示状態の保持）
//! - `state`: 画面モード
//! - `input`: キー入力処理
//! - `render`: 画面描画

mod input;
mod port;
mod render;
mod state;

use crate::app::QuoteApp;
use crate::error::Result;
use crate::render::{Notice, RenderPort};
use crate::storage::KeyValueStore;
use crate::sync::FetchedBatch;
use chrono::Local;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use futures::StreamExt;
use ratatui::prelude::*;
use render::SessionView;
use state::{Effect, TuiState};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

/// 通知の期限切れを確認する間隔
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// TUI を実行
pub async fn run<D, E>(mut session: QuoteApp<D, E>) -> Result<()>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut session).await;

    // ターミナルを復元（ループのエラーより先に）
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop<D, E>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut QuoteApp<D, E>,
) -> Result<()>
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let mut state = TuiState::new();
    session.start(&mut state.port, &mut rand::thread_rng())?;

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchedBatch>();
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    // 初回は即時に発火する
    let mut sync_timer = tokio::time::interval(session.agent().interval());
    let sync_enabled = session.agent().is_enabled();

    tracing::info!(sync_enabled, "tui started");

    while !state.should_quit {
        terminal.draw(|f| {
            let view = SessionView {
                form: session.form(),
                total: session.store().len(),
                sync: sync_enabled.then(|| session.agent().state()),
            };
            render::draw(f, &state, &view)
        })?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let effect = state.handle_key(key, session, &mut rand::thread_rng());
                    apply_effect(effect, &mut state, session, &tx);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(batch) = rx.recv() => {
                if let Err(e) = session.apply_batch(batch, &mut state.port) {
                    tracing::error!("failed to apply synced quotes: {e}");
                    state.port.notify(Notice::error(e.to_string()));
                }
            }
            _ = sync_timer.tick(), if sync_enabled => {
                session.agent().spawn_fetch(tx.clone());
            }
            _ = tick.tick() => {
                state.port.expire_notice(Local::now());
            }
        }
    }

    tracing::info!("tui closed");
    Ok(())
}

/// キー処理の結果をイベントループ側で実行
fn apply_effect<D, E>(
    effect: Effect,
    state: &mut TuiState,
    session: &QuoteApp<D, E>,
    tx: &UnboundedSender<FetchedBatch>,
) where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let agent = session.agent();
    match effect {
        Effect::None => {}
        Effect::Push(quote) => agent.spawn_push(quote, tx.clone()),
        Effect::SyncNow if !agent.is_enabled() => {
            state.port.notify(Notice::info("Sync is not configured"));
        }
        Effect::SyncNow => {
            if agent.spawn_fetch(tx.clone()) {
                state.port.notify(Notice::info("Syncing with server..."));
            } else {
                state.port.notify(Notice::info("Sync already in progress"));
            }
        }
    }
}
