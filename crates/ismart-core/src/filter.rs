//! Category/brand selection over static lists

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter value meaning "no filtering applied".
pub const ALL_SENTINEL: &str = "all";

/// Items that carry a category tag
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Active filter value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL_SENTINEL,
            Selection::Only(selected) => selected,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL_SENTINEL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_str().to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable filter over a borrowed list, keyed on one string field.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a, T> {
    source: &'a [T],
    key: fn(&T) -> &str,
    active: Selection,
}

impl<'a, T: Categorized> CategoryFilter<'a, T> {
    /// Filter on [`Categorized::category`]
    pub fn new(source: &'a [T]) -> Self {
        Self::with_key(source, T::category)
    }
}

impl<'a, T> CategoryFilter<'a, T> {
    /// Filter on an arbitrary field, e.g. a product's brand
    pub fn with_key(source: &'a [T], key: fn(&T) -> &str) -> Self {
        Self {
            source,
            key,
            active: Selection::All,
        }
    }

    pub fn active(&self) -> &Selection {
        &self.active
    }

    pub fn set_category(&mut self, selection: impl Into<Selection>) {
        self.active = selection.into();
        tracing::debug!(active = %self.active, "filter selection changed");
    }

    /// Back to showing everything
    pub fn reset(&mut self) {
        self.active = Selection::All;
    }

    /// Matching items in source order
    pub fn filtered(&self) -> Vec<&'a T> {
        self.source
            .iter()
            .filter(|item| self.active.matches((self.key)(*item)))
            .collect()
    }

    /// True when the selection matches nothing; callers show a reset action.
    pub fn is_empty_result(&self) -> bool {
        !self.source.iter().any(|item| self.active.matches((self.key)(item)))
    }

    /// Distinct key values in first-seen order, for rendering filter tabs
    pub fn options(&self) -> Vec<&'a str> {
        let key = self.key;
        let mut seen: Vec<&'a str> = Vec::new();
        for item in self.source {
            let value = key(item);
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    pub fn count_for(&self, value: &str) -> usize {
        let selection = Selection::from(value);
        self.source
            .iter()
            .filter(|item| selection.matches((self.key)(*item)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        tag: &'static str,
        brand: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.tag
        }
    }

    const ITEMS: &[Item] = &[
        Item { id: 1, tag: "A", brand: "Apple" },
        Item { id: 2, tag: "B", brand: "Samsung" },
        Item { id: 3, tag: "A", brand: "Samsung" },
        Item { id: 4, tag: "C", brand: "Google" },
    ];

    fn ids(items: Vec<&Item>) -> Vec<u32> {
        items.into_iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_all_returns_source_unchanged() {
        let filter = CategoryFilter::new(ITEMS);
        assert_eq!(ids(filter.filtered()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut filter = CategoryFilter::new(ITEMS);
        filter.set_category("A");
        assert_eq!(ids(filter.filtered()), vec![1, 3]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut filter = CategoryFilter::new(ITEMS);
        filter.set_category("a");
        assert!(filter.filtered().is_empty());
        assert!(filter.is_empty_result());
        filter.reset();
        assert!(filter.active().is_all());
        assert!(!filter.is_empty_result());
    }

    #[test]
    fn test_sentinel_parses_to_all() {
        let mut filter = CategoryFilter::new(ITEMS);
        filter.set_category("B");
        filter.set_category(ALL_SENTINEL);
        assert_eq!(filter.active(), &Selection::All);
    }

    #[test]
    fn test_custom_key_filters_by_brand() {
        let mut filter = CategoryFilter::with_key(ITEMS, |item| item.brand);
        assert_eq!(filter.options(), vec!["Apple", "Samsung", "Google"]);
        assert_eq!(filter.count_for("Samsung"), 2);
        filter.set_category("Samsung".to_string());
        assert_eq!(ids(filter.filtered()), vec![2, 3]);
    }

    #[test]
    fn test_selection_serde_uses_sentinel() {
        assert_eq!(serde_json::to_string(&Selection::All).unwrap(), "\"all\"");
        let parsed: Selection = serde_json::from_str("\"phones\"").unwrap();
        assert_eq!(parsed, Selection::Only("phones".into()));
    }
}
