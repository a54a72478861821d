//! テスト用の記録ポート

use super::*;

/// 描画呼び出しを記録するポート
#[derive(Debug, Default)]
pub struct RecordingPort {
    /// 現在の表示領域
    pub displayed: Vec<Quote>,
    /// プレースホルダー表示中ならそのメッセージ
    pub placeholder: Option<String>,
    /// 現在のカテゴリ選択肢（値）
    pub options: Vec<String>,
    /// 現在のカテゴリ選択肢（ラベル）
    pub labels: Vec<String>,
    /// 選択中のカテゴリ
    pub selected: Option<String>,
    /// 受け取った通知
    pub notices: Vec<Notice>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最後の通知
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl RenderPort for RecordingPort {
    fn show_quote(&mut self, quote: &Quote) {
        self.placeholder = None;
        self.displayed = vec![quote.clone()];
    }

    fn show_placeholder(&mut self, message: &str) {
        self.displayed.clear();
        self.placeholder = Some(message.to_string());
    }

    fn clear_quotes(&mut self) {
        self.displayed.clear();
        self.placeholder = None;
    }

    fn append_quote(&mut self, quote: &Quote) {
        self.displayed.push(quote.clone());
    }

    fn set_category_options(&mut self, options: &[CategoryOption], selected: &str) {
        self.options = options.iter().map(|o| o.value.clone()).collect();
        self.labels = options.iter().map(|o| o.label.clone()).collect();
        self.selected = Some(selected.to_string());
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
