//! qm list コマンド
//!
//! 名言の一覧を表示する。`--category` 指定時は選択を保存して絞り込む。

use super::open_session;
use crate::filter::{self, ALL_CATEGORIES};
use crate::quote::Quote;
use crate::render::ConsolePort;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category ("all" to clear the filter). The selection is remembered.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output one line per quote
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let (_, mut session) = open_session()?;
    let mut port = if args.json || args.simple {
        ConsolePort::notices_only()
    } else {
        ConsolePort::new()
    };

    match &args.category {
        Some(category) => session
            .select_category(category, &mut port)
            .map_err(|e| e.to_string())?,
        None => session.show_selected(&mut port).map_err(|e| e.to_string())?,
    }

    let quotes = filter::filtered(session.store().quotes(), session.filter().selected());
    let total_count = session.store().len();

    if args.json {
        print_json(&quotes)?;
    } else if args.simple {
        print_simple(&quotes, total_count);
    } else if quotes.is_empty() {
        print_empty(total_count);
    }

    if !args.json && session.filter().selected() != ALL_CATEGORIES {
        eprintln!("(category: {})", session.filter().selected());
    }

    Ok(())
}

fn print_json(quotes: &[&Quote]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(quotes)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize quotes: {}", e))
}

fn print_simple(quotes: &[&Quote], total_count: usize) {
    if quotes.is_empty() {
        print_empty(total_count);
        return;
    }
    for quote in quotes {
        println!("{}", format_simple(quote));
    }
}

fn print_empty(total_count: usize) {
    if total_count == 0 {
        println!("No quotes available");
    } else {
        println!("No quotes matched");
    }
}

fn format_simple(quote: &Quote) -> String {
    format!("{}\t{}", quote.category, quote.text)
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
