//! qm categories コマンド
//!
//! カテゴリ選択肢と件数、現在の選択を表示する。

use super::open_session;
use crate::filter::{self, ALL_CATEGORIES};
use crate::quote::Quote;
use crate::render::{option_label, ConsolePort};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Output only category values
    #[arg(long)]
    pub simple: bool,
}

/// 表示用の1行
#[derive(Debug, PartialEq, Eq)]
struct CategoryRow {
    value: String,
    label: String,
    count: usize,
    selected: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let (_, mut session) = open_session()?;
    let mut port = ConsolePort::notices_only();

    // 保存済みの選択を復元（消えたカテゴリは "all" 扱い）
    session.show_selected(&mut port).map_err(|e| e.to_string())?;

    let filter = session.filter();
    let rows = build_rows(filter.options(), session.store().quotes(), filter.selected());

    if args.simple {
        for row in &rows {
            println!("{}", row.value);
        }
    } else {
        print_table(&rows);
    }

    Ok(())
}

fn build_rows(options: &[String], quotes: &[Quote], selected: &str) -> Vec<CategoryRow> {
    options
        .iter()
        .map(|value| CategoryRow {
            value: value.clone(),
            label: option_label(value),
            count: filter::filtered(quotes, value).len(),
            selected: value == selected,
        })
        .collect()
}

fn print_table(rows: &[CategoryRow]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Category", "Label", "Quotes"]);

    for row in rows {
        let marker = if row.selected {
            Cell::new("*").fg(Color::Green)
        } else {
            Cell::new("")
        };
        let value = if row.value == ALL_CATEGORIES {
            Cell::new(&row.value).fg(Color::DarkGrey)
        } else {
            Cell::new(&row.value)
        };
        table.add_row(vec![
            marker,
            value,
            Cell::new(&row.label),
            Cell::new(row.count),
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
