//! 同期 Feature
//!
//! ローカルのストアをリモートの名言一覧と突き合わせる。
//! 競合解決は行わず、ローカルに無い（本文・カテゴリが一致しない）名言を
//! 末尾に追加するだけの追記型マージ。
//!
//! ## 使い方
//!
//! ```ignore
//! use crate::sync::SyncAgent;
//!
//! let agent = SyncAgent::from_config(&config);
//!
//! if let Some(report) = agent.run_cycle(&mut store).await? {
//!     println!("Added: {}", report.added);
//! }
//! ```

mod agent;
mod merge;
mod remote;

pub use agent::{FetchedBatch, SyncAgent, SyncState};
pub use merge::{merge, MergeReport};

#[cfg(test)]
pub mod mock;
