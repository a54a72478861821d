//! qm が参照する環境変数

use std::path::PathBuf;

/// データディレクトリの上書き（`~/` 始まりはホームからの相対）
pub const QM_HOME: &str = "QM_HOME";
/// 同期エンドポイントの上書き（config.toml より優先）
pub const QM_SYNC_URL: &str = "QM_SYNC_URL";
/// ログフィルタ（tracing の EnvFilter 書式）
pub const QM_LOG: &str = "QM_LOG";

const HOME: &str = "HOME";

pub struct EnvVar;

impl EnvVar {
    /// 値を取得（空・空白のみは未設定扱い）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// ホームディレクトリ
    pub fn home_dir() -> Option<PathBuf> {
        Self::get(HOME).map(PathBuf::from)
    }

    /// パスとして取得し、先頭の `~` をホームに展開する
    ///
    /// HOME が未設定なら `~` はそのまま残す。
    pub fn path(key: &str) -> Option<PathBuf> {
        Self::get(key).map(|value| expand_home(&value, Self::home_dir()))
    }
}

fn expand_home(value: &str, home: Option<PathBuf>) -> PathBuf {
    let rest = match value.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(value),
    };
    match home {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(value),
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
