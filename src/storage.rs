//! キーバリューストレージ
//!
//! 永続スロット（`quotes`, `selectedCategory`）とセッションスロット
//! （`lastViewedQuote`）の読み書き契約を提供する。
//!
//! - `FileKeyValueStore`: 1つの JSON ファイルに全キーを保存（永続）
//! - `MemoryKeyValueStore`: プロセス内のみ（セッション・テスト用）

use crate::error::{QmError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 名言一覧のキー
pub const QUOTES_KEY: &str = "quotes";

/// 選択中カテゴリのキー
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// 最後に表示した名言のキー（セッションスロット）
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// キーバリューストレージの契約
pub trait KeyValueStore {
    /// 値を取得（未設定なら None）
    fn get(&self, key: &str) -> Option<String>;

    /// 値を設定
    ///
    /// 永続実装では呼び出しが返った時点で書き込みが完了している。
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// ファイルベースの永続ストレージ
///
/// `set` のたびにファイル全体を書き直す（一時ファイル + persist）。
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// ストレージファイルを開く
    ///
    /// - ファイルが無ければ空として扱う
    /// - JSON オブジェクトとして読めない場合は `<name>.corrupt` へ退避して空から始める
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    let backup = corrupt_backup_path(&path);
                    tracing::warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        "storage file is not a JSON object ({e}); starting empty"
                    );
                    fs::rename(&path, &backup)?;
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(QmError::Io(e)),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)
            .map_err(|e| QmError::Storage(format!("Failed to create temp file: {}", e)))?;

        let content = serde_json::to_string_pretty(&self.entries)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;

        temp_file
            .persist(&self.path)
            .map_err(|e| QmError::Storage(format!("Failed to persist storage: {}", e)))?;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.save()
    }
}

fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

/// メモリ上のストレージ
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
