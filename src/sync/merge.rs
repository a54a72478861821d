use crate::error::Result;
use crate::quote::Quote;
use crate::render::Notice;
use crate::storage::KeyValueStore;
use crate::store::QuoteStore;
use std::collections::HashSet;

/// マージ結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    /// 追加件数
    pub added: usize,
}

impl MergeReport {
    /// 1件以上追加された場合のみ通知を返す
    pub fn notice(&self) -> Option<Notice> {
        (self.added > 0).then(|| {
            Notice::info(format!("Synced {} new quote(s) from server", self.added))
        })
    }
}

/// リモートのうちローカルに無いものをリモートの順序で返す
///
/// 同じバッチ内の重複は最初の1件のみ残す。
pub fn missing_from(local: &[Quote], remote: Vec<Quote>) -> Vec<Quote> {
    let mut known: HashSet<Quote> = local.iter().cloned().collect();
    remote
        .into_iter()
        .filter(|quote| known.insert(quote.clone()))
        .collect()
}

/// リモート一覧をストアへマージ（追加があれば1回だけ永続化）
pub fn merge<S: KeyValueStore>(remote: Vec<Quote>, store: &mut QuoteStore<S>) -> Result<MergeReport> {
    let missing = missing_from(store.quotes(), remote);
    let added = store.append_all(missing)?;
    Ok(MergeReport { added })
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
