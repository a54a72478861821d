//! 設定の読み込み
//!
//! データディレクトリ（`QM_HOME` または `~/.qm`）配下の `config.toml` と
//! 環境変数から実行時設定を組み立てる。

use crate::env::{self, EnvVar};
use crate::error::{QmError, Result};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 設定ファイル名
const CONFIG_FILE: &str = "config.toml";

/// 永続ストレージのファイル名
const STORAGE_FILE: &str = "storage.json";

/// TUI 実行時のログファイル名
const LOG_FILE: &str = "qm.log";

/// 同期間隔のデフォルト（秒）
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "qm-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 同期設定
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// 同期先エンドポイント（未設定なら同期は無効）
    pub endpoint: Option<Url>,
    /// 定期同期の間隔
    pub interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
        }
    }
}

/// config.toml のルート構造
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sync: SyncSection,
    #[serde(default)]
    http: HttpSection,
}

#[derive(Debug, Default, Deserialize)]
struct SyncSection {
    endpoint: Option<String>,
    interval_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct HttpSection {
    timeout_secs: Option<u64>,
}

/// 実行時設定
#[derive(Debug, Clone)]
pub struct QmConfig {
    pub data_dir: PathBuf,
    pub http: HttpConfig,
    pub sync: SyncConfig,
}

impl QmConfig {
    /// デフォルトのデータディレクトリから読み込む
    ///
    /// 優先順位: `QM_HOME` > `~/.qm`
    pub fn load() -> Result<Self> {
        Self::load_from(default_data_dir()?)
    }

    /// 指定ディレクトリから読み込む
    ///
    /// `config.toml` が無ければデフォルト値を使う。
    /// `QM_SYNC_URL` はファイルの `sync.endpoint` より優先する。
    pub fn load_from(data_dir: PathBuf) -> Result<Self> {
        let file = read_config_file(&data_dir.join(CONFIG_FILE))?;

        let mut http = HttpConfig::default();
        if let Some(secs) = file.http.timeout_secs {
            http.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        let interval_secs = file
            .sync
            .interval_secs
            .unwrap_or(DEFAULT_SYNC_INTERVAL_SECS);
        if interval_secs == 0 {
            return Err(QmError::InvalidConfig(
                "sync.interval_secs must be greater than 0".to_string(),
            ));
        }

        let endpoint = match EnvVar::get(env::QM_SYNC_URL).or(file.sync.endpoint) {
            Some(raw) => Some(parse_endpoint(&raw)?),
            None => None,
        };

        Ok(Self {
            data_dir,
            http,
            sync: SyncConfig {
                endpoint,
                interval: Duration::from_secs(interval_secs),
            },
        })
    }

    /// 永続ストレージのパス
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    /// TUI 用ログファイルのパス
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

/// データディレクトリを決定
fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = EnvVar::path(env::QM_HOME) {
        return Ok(dir);
    }
    let home = EnvVar::home_dir().ok_or_else(|| {
        QmError::InvalidConfig("HOME environment variable not set".to_string())
    })?;
    Ok(home.join(".qm"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => return Err(QmError::Io(e)),
    };

    toml::from_str(&content)
        .map_err(|e| QmError::InvalidConfig(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
}

/// エンドポイント URL の検証（http/https のみ）
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| QmError::InvalidConfig(format!("Invalid sync endpoint '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(QmError::InvalidConfig(format!(
            "Unsupported sync endpoint scheme '{}'. Use http or https.",
            scheme
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
