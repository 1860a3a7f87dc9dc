//! Multi-card slider whose index never scrolls past the last full window

use super::Steppable;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// What happens when stepping beyond either end of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Jump to the opposite end
    Wrap,
    /// Stay at the boundary
    Clamp,
}

/// Left-most visible card index for a carousel showing `window` cards.
///
/// Invariant: `index <= max_index()` where `max_index = len - window`
/// (saturating at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowedSlider {
    index: usize,
    len: usize,
    window: usize,
    policy: OverflowPolicy,
}

impl WindowedSlider {
    /// A `window` of 0 is treated as 1.
    pub fn new(len: usize, window: usize, policy: OverflowPolicy) -> Self {
        Self {
            index: 0,
            len,
            window: window.max(1),
            policy,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.window)
    }

    pub fn next(&mut self) -> usize {
        if self.index < self.max_index() {
            self.index += 1;
        } else if self.policy == OverflowPolicy::Wrap {
            self.index = 0;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.index > 0 {
            self.index -= 1;
        } else if self.policy == OverflowPolicy::Wrap {
            self.index = self.max_index();
        }
        self.index
    }

    /// Jump so that card `i` is left-most. Ignored when `i > max_index()`.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i > self.max_index() {
            return false;
        }
        self.index = i;
        true
    }

    /// Whether the forward arrow does anything
    pub fn can_advance(&self) -> bool {
        self.policy == OverflowPolicy::Wrap && self.max_index() > 0 || self.index < self.max_index()
    }

    /// Whether the backward arrow does anything
    pub fn can_retreat(&self) -> bool {
        self.policy == OverflowPolicy::Wrap && self.max_index() > 0 || self.index > 0
    }

    /// Cards currently in view
    pub fn visible_range(&self) -> Range<usize> {
        self.index..(self.index + self.window).min(self.len)
    }

    /// Change how many cards fit, e.g. on a breakpoint change. The index is
    /// pulled back so the last window stays full.
    pub fn set_window(&mut self, window: usize) {
        self.window = window.max(1);
        self.index = self.index.min(self.max_index());
    }

    /// Track translation when each card takes exactly `100 / window` percent.
    pub fn offset_percent(&self) -> f64 {
        -(100.0 / self.window as f64) * self.index as f64
    }

    /// Track translation when cards are `card_width_percent` wide including
    /// the inter-card gap.
    pub fn offset_with_card_width(&self, card_width_percent: f64) -> f64 {
        -card_width_percent * self.index as f64
    }
}

impl Steppable for WindowedSlider {
    fn index(&self) -> usize {
        self.index
    }

    fn step_forward(&mut self) -> usize {
        self.next()
    }

    fn step_backward(&mut self) -> usize {
        self.previous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_next(slider: &mut WindowedSlider, times: usize) -> Vec<usize> {
        (0..times).map(|_| slider.next()).collect()
    }

    #[test]
    fn test_max_index() {
        assert_eq!(WindowedSlider::new(8, 4, OverflowPolicy::Clamp).max_index(), 4);
        assert_eq!(WindowedSlider::new(3, 4, OverflowPolicy::Clamp).max_index(), 0);
    }

    #[test]
    fn test_clamp_stays_at_max() {
        let mut slider = WindowedSlider::new(8, 4, OverflowPolicy::Clamp);
        assert_eq!(run_next(&mut slider, 5), vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_wrap_returns_to_start() {
        let mut slider = WindowedSlider::new(8, 4, OverflowPolicy::Wrap);
        assert_eq!(run_next(&mut slider, 5), vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_previous_mirrors_policy() {
        let mut clamp = WindowedSlider::new(8, 4, OverflowPolicy::Clamp);
        assert_eq!(clamp.previous(), 0);

        let mut wrap = WindowedSlider::new(8, 4, OverflowPolicy::Wrap);
        assert_eq!(wrap.previous(), 4);
        assert_eq!(wrap.previous(), 3);
    }

    #[test]
    fn test_arrow_availability() {
        let mut slider = WindowedSlider::new(6, 3, OverflowPolicy::Clamp);
        assert!(slider.can_advance());
        assert!(!slider.can_retreat());
        slider.go_to(3);
        assert!(!slider.can_advance());
        assert!(slider.can_retreat());

        let short = WindowedSlider::new(2, 3, OverflowPolicy::Wrap);
        assert!(!short.can_advance());
        assert!(!short.can_retreat());
    }

    #[test]
    fn test_set_window_reclamps_index() {
        let mut slider = WindowedSlider::new(8, 2, OverflowPolicy::Clamp);
        slider.go_to(6);
        slider.set_window(4);
        assert_eq!(slider.index(), 4);
        assert_eq!(slider.visible_range(), 4..8);
    }

    #[test]
    fn test_offsets() {
        let mut slider = WindowedSlider::new(8, 4, OverflowPolicy::Wrap);
        slider.go_to(2);
        assert_eq!(slider.offset_percent(), -50.0);
        assert_eq!(slider.offset_with_card_width(26.0), -52.0);
    }

    #[test]
    fn test_zero_window_treated_as_one() {
        let slider = WindowedSlider::new(5, 0, OverflowPolicy::Clamp);
        assert_eq!(slider.window(), 1);
        assert_eq!(slider.max_index(), 4);
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&OverflowPolicy::Clamp).unwrap();
        assert_eq!(json, "\"clamp\"");
        let policy: OverflowPolicy = serde_json::from_str("\"wrap\"").unwrap();
        assert_eq!(policy, OverflowPolicy::Wrap);
    }
}
