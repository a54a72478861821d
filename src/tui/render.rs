//! 名言ビューア TUI の描画処理

use super::port::StampedNotice;
use super::state::{FormField, Mode, TuiState};
use crate::form::QuoteForm;
use crate::render::NoticeLevel;
use crate::sync::SyncState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};

/// 描画に必要なセッション側の情報
pub(super) struct SessionView<'a> {
    pub form: &'a QuoteForm,
    pub total: usize,
    pub sync: Option<SyncState>,
}

/// UI をレンダリング
pub(super) fn draw(f: &mut Frame, state: &TuiState, view: &SessionView<'_>) {
    f.render_widget(Clear, f.area());

    let panel_height = match state.mode {
        Mode::Browse => 0,
        Mode::AddForm(_) => 4,
        Mode::ImportPrompt => 3,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // カテゴリ
            Constraint::Min(3),               // 名言
            Constraint::Length(panel_height), // フォーム
            Constraint::Length(1),            // 通知
            Constraint::Length(1),            // ヘルプ
        ])
        .split(f.area());

    render_categories(f, state, chunks[0]);
    render_quotes(f, state, view, chunks[1]);
    match state.mode {
        Mode::Browse => {}
        Mode::AddForm(field) => render_form(f, view.form, field, chunks[2]),
        Mode::ImportPrompt => render_import_prompt(f, &state.import_path, chunks[2]),
    }
    render_notice(f, state.port.notice.as_ref(), chunks[3]);
    render_help(f, state.mode, view.sync, chunks[4]);
}

/// カテゴリ選択肢
fn render_categories(f: &mut Frame, state: &TuiState, area: Rect) {
    let titles: Vec<&str> = state
        .port
        .options
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.port.selected_index().unwrap_or(0))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// 名言の表示領域
fn render_quotes(f: &mut Frame, state: &TuiState, view: &SessionView<'_>, area: Rect) {
    let title = format!(" Quotes ({}/{}) ", state.port.display.len(), view.total);
    let block = Block::default().title(title).borders(Borders::ALL);

    let paragraph = match &state.port.placeholder {
        Some(message) => Paragraph::new(format!("\n  {}", message))
            .style(Style::default().fg(Color::DarkGray)),
        None => {
            let mut lines: Vec<Line> = Vec::new();
            for (i, quote) in state.port.display.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::raw(""));
                }
                lines.push(Line::raw(format!("  \"{}\"", quote.text)));
                lines.push(Line::styled(
                    format!("    — {}", quote.category),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            Paragraph::new(lines)
        }
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

/// 追加フォーム
fn render_form(f: &mut Frame, form: &QuoteForm, focus: FormField, area: Rect) {
    let field_line = |label: &str, value: &str, field: FormField| {
        let style = if field == focus {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if field == focus { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!(" {label:<9}"), style),
            Span::raw(format!("{value}{cursor}")),
        ])
    };

    let lines = vec![
        field_line("Quote:", &form.text, FormField::Text),
        field_line("Category:", &form.category, FormField::Category),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Add Quote ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// インポートのパス入力
fn render_import_prompt(f: &mut Frame, path: &str, area: Rect) {
    let paragraph = Paragraph::new(format!(" {path}_"))
        .block(Block::default().title(" Import JSON file ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// 通知行
fn render_notice(f: &mut Frame, notice: Option<&StampedNotice>, area: Rect) {
    let Some(stamped) = notice else {
        return;
    };
    let color = match stamped.notice.level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Info => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" [{}] ", stamped.shown_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(stamped.notice.message.clone(), Style::default().fg(color)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// ヘルプ行
fn render_help(f: &mut Frame, mode: Mode, sync: Option<SyncState>, area: Rect) {
    let help_text = match mode {
        Mode::Browse => {
            " n: next · a: add · ←/→: category · i: import · e: export · s: sync · q: quit"
        }
        Mode::AddForm(_) => " Tab: switch field · Enter: add · Esc: cancel",
        Mode::ImportPrompt => " Enter: import · Esc: cancel",
    };
    let sync_text = match sync {
        None => "sync off",
        Some(SyncState::Idle) => "sync idle",
        Some(SyncState::Fetching) => "syncing…",
        Some(SyncState::Merging) => "merging…",
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(area);

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[0]);
    let status = Paragraph::new(sync_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(status, chunks[1]);
}
