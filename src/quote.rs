//! 名言ドメイン型

use serde::{Deserialize, Serialize};

/// 名言（本文とカテゴリの組）
///
/// 識別子は持たない。重複判定は本文・カテゴリの完全一致で行う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// 保存データが無い場合の初期データ
    pub fn seed() -> Vec<Quote> {
        vec![
            Quote::new(
                "The greatest glory in living lies not in never falling, but in rising every time we fall.",
                "Motivation",
            ),
            Quote::new(
                "The way to get started is to quit talking and begin doing.",
                "Action",
            ),
            Quote::new(
                "Your time is limited, so don't waste it living someone else's life.",
                "Life",
            ),
        ]
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" ({})", self.text, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_distinct_categories() {
        let seed = Quote::seed();
        let categories: Vec<&str> = seed.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(categories, vec!["Motivation", "Action", "Life"]);
    }

    #[test]
    fn equality_requires_text_and_category() {
        let a = Quote::new("Stay hungry.", "Life");
        assert_eq!(a, Quote::new("Stay hungry.", "Life"));
        assert_ne!(a, Quote::new("Stay hungry.", "Motivation"));
        assert_ne!(a, Quote::new("Stay foolish.", "Life"));
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let quote: Quote =
            serde_json::from_str(r#"{"id": 7, "text": "Hi", "category": "Greeting"}"#).unwrap();
        assert_eq!(quote, Quote::new("Hi", "Greeting"));
    }
}
