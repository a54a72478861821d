//! ログ出力の初期化
//!
//! `QM_LOG` でフィルタを指定する（例: `QM_LOG=qm=debug`）。未指定時は `warn`。

use crate::env::QM_LOG;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(QM_LOG).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// CLI 用: 標準エラーへ出力
pub fn init_stderr() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    // 二重初期化（テスト等）は無視する
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

/// TUI 用: 代替スクリーンを乱さないようファイルへ出力
///
/// ログファイルを開けない場合はログを捨てる。
pub fn init_file(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
