use super::*;
use crate::render::mock::RecordingPort;
use crate::render::NoticeLevel;
use crate::storage::MemoryKeyValueStore;
use proptest::prelude::*;

fn form_with(text: &str, category: &str) -> QuoteForm {
    QuoteForm {
        text: text.to_string(),
        category: category.to_string(),
    }
}

#[test]
fn submit_appends_clears_and_notifies() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with("Do or do not.", "Motivation");

    let outcome = form.submit(&mut store, &mut filter, &mut port).unwrap();

    let expected = Quote::new("Do or do not.", "Motivation");
    assert_eq!(outcome, SubmitOutcome::Added(expected.clone()));
    assert_eq!(store.len(), 4);
    assert_eq!(store.quotes().last(), Some(&expected));
    assert!(form.text.is_empty());
    assert!(form.category.is_empty());
    assert_eq!(port.options, vec!["all", "Motivation", "Action", "Life"]);
    assert_eq!(port.last_notice(), Some(&Notice::success(ADDED_MESSAGE)));
}

#[test]
fn submit_with_empty_text_is_rejected() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with("", "Motivation");

    let outcome = form.submit(&mut store, &mut filter, &mut port).unwrap();

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(store.len(), 3);
    assert_eq!(form.category, "Motivation");
    let notice = port.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, VALIDATION_MESSAGE);
}

#[test]
fn submit_with_empty_category_is_rejected() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with("Some text", "");

    let outcome = form.submit(&mut store, &mut filter, &mut port).unwrap();

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(store.len(), 3);
}

#[test]
fn submit_with_both_empty_is_rejected_without_write() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with("", "");

    let outcome = form.submit(&mut store, &mut filter, &mut port).unwrap();

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(store.storage().get(crate::storage::QUOTES_KEY), None);
}

#[test]
fn submit_accepts_whitespace_only_fields() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with(" ", " ");

    let outcome = form.submit(&mut store, &mut filter, &mut port).unwrap();

    assert_eq!(outcome, SubmitOutcome::Added(Quote::new(" ", " ")));
    assert_eq!(store.len(), 4);
}

#[test]
fn submit_stores_input_verbatim() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let mut filter = CategoryFilter::new();
    let mut port = RecordingPort::new();
    let mut form = form_with("  padded  ", " Life ");

    form.submit(&mut store, &mut filter, &mut port).unwrap();

    let last = store.quotes().last().unwrap();
    assert_eq!(last, &Quote::new("  padded  ", " Life "));
    // 前後の空白が違えば別カテゴリ
    assert!(filter.options().iter().any(|o| o == " Life "));
    assert!(filter.options().iter().any(|o| o == "Life"));
}

proptest! {
    /// 空でない入力は必ず1件だけ末尾に追加される
    #[test]
    fn prop_valid_submit_grows_store_by_one(
        text in "[A-Za-z .,!?]{1,30}",
        category in "[A-Za-z ]{1,12}"
    ) {
        let mut store = QuoteStore::load(MemoryKeyValueStore::new());
        let mut filter = CategoryFilter::new();
        let mut port = RecordingPort::new();
        let before = store.len();
        let mut form = form_with(&text, &category);

        form.submit(&mut store, &mut filter, &mut port).unwrap();

        prop_assert_eq!(store.len(), before + 1);
        let last = store.quotes().last().unwrap();
        prop_assert_eq!(last.text.as_str(), text.as_str());
        prop_assert_eq!(last.category.as_str(), category.as_str());
    }
}
