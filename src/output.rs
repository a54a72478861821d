use crate::sync::MergeReport;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// 同期結果の要約
    pub fn sync(report: Option<MergeReport>) -> Self {
        match report {
            None => Self {
                prefix: "•".yellow().to_string(),
                message: "Sync skipped".to_string(),
            },
            Some(MergeReport { added }) if added > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{added} new quote(s) synced"),
            },
            Some(_) => Self {
                prefix: "•".yellow().to_string(),
                message: "Already up to date".to_string(),
            },
        }
    }

    /// インポート結果の要約
    pub fn import(added: usize) -> Self {
        match added {
            0 => Self {
                prefix: "•".yellow().to_string(),
                message: "No quotes found in file".to_string(),
            },
            n => Self {
                prefix: "✓".green().to_string(),
                message: format!("{n} quote(s) imported"),
            },
        }
    }
}

impl std::fmt::Display for CommandSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

/// スピナー付きの進捗表示
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
