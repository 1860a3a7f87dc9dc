//! Expanded/collapsed state for accordions and toggle panels

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Single-open accordion: opening a panel closes the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// `initial` is `Some(0)` for "first panel open" pages, `None` for all closed.
    pub fn new(initial: Option<usize>) -> Self {
        Self { open: initial }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open == Some(i)
    }

    pub fn toggle(&mut self, i: usize) -> Option<usize> {
        self.open = if self.open == Some(i) { None } else { Some(i) };
        self.open
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

/// Independent toggles, any number open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSet {
    open: BTreeSet<usize>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            open: indices.into_iter().collect(),
        }
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open.contains(&i)
    }

    /// Flip panel `i`, returning its new state
    pub fn toggle(&mut self, i: usize) -> bool {
        if self.open.remove(&i) {
            false
        } else {
            self.open.insert(i);
            true
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_toggle_sequence() {
        let mut accordion = Accordion::new(Some(0));
        assert_eq!(accordion.toggle(0), None);
        assert_eq!(accordion.toggle(0), Some(0));
        assert_eq!(accordion.toggle(2), Some(2));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn test_accordion_starts_closed() {
        let mut accordion = Accordion::new(None);
        assert_eq!(accordion.open_index(), None);
        accordion.toggle(1);
        accordion.close_all();
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_toggle_set_is_independent() {
        let mut toggles = ToggleSet::with_open([1]);
        assert!(toggles.toggle(0));
        assert!(toggles.toggle(3));
        assert_eq!(toggles.open_count(), 3);
        assert!(!toggles.toggle(1));
        assert!(toggles.is_open(0));
        assert!(!toggles.is_open(1));
        toggles.collapse_all();
        assert_eq!(toggles.open_count(), 0);
    }
}
