//! 名言ビューア TUI の入力処理
//!
//! モードごとのキー処理。ストアを変更する操作はすべて `QuoteApp` 経由で行い、
//! 失敗は通知行へ表示する。

use super::state::{Effect, FormField, Mode, TuiState};
use crate::app::QuoteApp;
use crate::error::Result;
use crate::form::SubmitOutcome;
use crate::render::{Notice, RenderPort};
use crate::storage::KeyValueStore;
use crate::transfer::DEFAULT_EXPORT_FILE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use std::path::Path;

impl TuiState {
    /// キー入力を処理
    pub(super) fn handle_key<D, E, R>(
        &mut self,
        key: KeyEvent,
        session: &mut QuoteApp<D, E>,
        rng: &mut R,
    ) -> Effect
    where
        D: KeyValueStore,
        E: KeyValueStore,
        R: Rng + ?Sized,
    {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Effect::None;
        }

        let result = match self.mode {
            Mode::Browse => self.handle_browse(key.code, session, rng),
            Mode::AddForm(field) => self.handle_form(key.code, field, session),
            Mode::ImportPrompt => self.handle_import(key.code, session),
        };

        result.unwrap_or_else(|e| {
            tracing::error!("{e}");
            self.port.notify(Notice::error(e.to_string()));
            Effect::None
        })
    }

    fn handle_browse<D, E, R>(
        &mut self,
        key: KeyCode,
        session: &mut QuoteApp<D, E>,
        rng: &mut R,
    ) -> Result<Effect>
    where
        D: KeyValueStore,
        E: KeyValueStore,
        R: Rng + ?Sized,
    {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => {
                session.show_random(&mut self.port, rng)?;
            }
            KeyCode::Char('a') => self.mode = Mode::AddForm(FormField::Text),
            KeyCode::Char('i') => {
                self.import_path.clear();
                self.mode = Mode::ImportPrompt;
            }
            KeyCode::Char('e') => self.export(session)?,
            KeyCode::Char('s') => return Ok(Effect::SyncNow),
            KeyCode::Left | KeyCode::Char('h') => self.step_category(-1, session)?,
            KeyCode::Right | KeyCode::Char('l') => self.step_category(1, session)?,
            _ => {}
        }
        Ok(Effect::None)
    }

    fn handle_form<D, E>(
        &mut self,
        key: KeyCode,
        field: FormField,
        session: &mut QuoteApp<D, E>,
    ) -> Result<Effect>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        match key {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.mode = Mode::AddForm(field.toggle());
            }
            KeyCode::Enter => {
                if let SubmitOutcome::Added(quote) = session.submit(&mut self.port)? {
                    self.mode = Mode::Browse;
                    return Ok(Effect::Push(quote));
                }
            }
            KeyCode::Backspace => {
                form_field(session, field).pop();
            }
            KeyCode::Char(c) => form_field(session, field).push(c),
            _ => {}
        }
        Ok(Effect::None)
    }

    fn handle_import<D, E>(&mut self, key: KeyCode, session: &mut QuoteApp<D, E>) -> Result<Effect>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        match key {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => {
                let path = self.import_path.trim().to_string();
                if path.is_empty() {
                    return Ok(Effect::None);
                }
                // 失敗時はプロンプトに留まり、パスを直せるようにする
                session.import_file(Path::new(&path), &mut self.port)?;
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.import_path.pop();
            }
            KeyCode::Char(c) => self.import_path.push(c),
            _ => {}
        }
        Ok(Effect::None)
    }

    /// 隣のカテゴリへ切り替え（端で循環）
    fn step_category<D, E>(&mut self, step: isize, session: &mut QuoteApp<D, E>) -> Result<()>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        let next = session.filter().neighbor(step).to_string();
        session.select_category(&next, &mut self.port)

    }

    fn export<D, E>(&mut self, session: &QuoteApp<D, E>) -> Result<()>
    where
        D: KeyValueStore,
        E: KeyValueStore,
    {
        session.export_file(Path::new(DEFAULT_EXPORT_FILE))?;
        self.port.notify(Notice::success(format!(
            "Exported {} quote(s) to {}",
            session.store().len(),
            DEFAULT_EXPORT_FILE
        )));
        Ok(())
    }
}

fn form_field<D, E>(session: &mut QuoteApp<D, E>, field: FormField) -> &mut String
where
    D: KeyValueStore,
    E: KeyValueStore,
{
    let form = session.form_mut();
    match field {
        FormField::Text => &mut form.text,
        FormField::Category => &mut form.category,
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
