//! インポート / エクスポート
//!
//! ストア全体を JSON 配列として書き出し、同じ形式のファイルを読み込んで追記する。

use crate::error::{QmError, Result};
use crate::filter::CategoryFilter;
use crate::quote::Quote;
use crate::render::{Notice, RenderPort};
use crate::storage::KeyValueStore;
use crate::store::QuoteStore;
use std::fs;
use std::path::Path;

/// エクスポートのデフォルトファイル名
pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// インポート成功時のメッセージ
pub const IMPORTED_MESSAGE: &str = "Quotes imported successfully!";

/// ストア全体を JSON 文字列へ
pub fn export_all(quotes: &[Quote]) -> Result<String> {
    Ok(serde_json::to_string(quotes)?)
}

/// ストア全体をファイルへ書き出す（親ディレクトリは自動作成）
pub fn export_to_file(quotes: &[Quote], path: &Path) -> Result<()> {
    let content = export_all(quotes)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// ファイル内容を名言の配列として解釈
///
/// JSON として不正、または `text` / `category` を欠く要素がある場合は
/// `QmError::InvalidImport` を返す（1件も追加しない）。
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(contents).map_err(|e| QmError::InvalidImport(e.to_string()))
}

/// ファイル内容を読み込んでストアへそのまま追記
///
/// 既存との重複は排除しない。追記件数を返す。
pub fn import_from<S: KeyValueStore>(
    contents: &str,
    store: &mut QuoteStore<S>,
    filter: &mut CategoryFilter,
    port: &mut dyn RenderPort,
) -> Result<usize> {
    let imported = parse_import(contents)?;
    let added = store.append_all(imported)?;

    filter.rebuild(store, port);
    port.notify(Notice::success(IMPORTED_MESSAGE));

    Ok(added)
}

/// ファイルから読み込んでストアへ追記
pub fn import_from_file<S: KeyValueStore>(
    path: &Path,
    store: &mut QuoteStore<S>,
    filter: &mut CategoryFilter,
    port: &mut dyn RenderPort,
) -> Result<usize> {
    let contents = fs::read_to_string(path)?;
    import_from(&contents, store, filter, port)
}

#[cfg(test)]
#[path = "transfer_test.rs"]
mod tests;
