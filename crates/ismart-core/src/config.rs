//! Widget configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_AUTOPLAY_MS: u64 = 5000;
pub const DEFAULT_TESTIMONIAL_AUTOPLAY_MS: u64 = 6000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1200;

/// Tunables for the interactive widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Hero carousel autoplay interval (ms); 0 disables autoplay
    pub autoplay_interval_ms: u64,
    /// Testimonial carousel autoplay interval (ms); 0 disables autoplay
    pub testimonial_autoplay_interval_ms: u64,
    /// Simulated network delay for form submissions (ms)
    pub submit_delay_ms: u64,
    /// Cards visible at once in the best-seller slider
    pub best_seller_window: usize,
    /// Cards visible at once in the press slider
    pub press_window: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_MS,
            testimonial_autoplay_interval_ms: DEFAULT_TESTIMONIAL_AUTOPLAY_MS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            best_seller_window: 4,
            press_window: 3,
        }
    }
}

impl WidgetConfig {
    /// Defaults overridden by `ISMART_*` environment variables
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `ISMART_*` key
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup("ISMART_AUTOPLAY_MS") {
            config.autoplay_interval_ms = parse_number("ISMART_AUTOPLAY_MS", &value)?;
        }
        if let Some(value) = lookup("ISMART_TESTIMONIAL_AUTOPLAY_MS") {
            config.testimonial_autoplay_interval_ms = parse_number("ISMART_TESTIMONIAL_AUTOPLAY_MS", &value)?;
        }
        if let Some(value) = lookup("ISMART_SUBMIT_DELAY_MS") {
            config.submit_delay_ms = parse_number("ISMART_SUBMIT_DELAY_MS", &value)?;
        }
        if let Some(value) = lookup("ISMART_BEST_SELLER_WINDOW") {
            config.best_seller_window = parse_number("ISMART_BEST_SELLER_WINDOW", &value)?;
        }
        if let Some(value) = lookup("ISMART_PRESS_WINDOW") {
            config.press_window = parse_number("ISMART_PRESS_WINDOW", &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.best_seller_window == 0 || self.press_window == 0 {
            return Err(CoreError::Config(
                "slider windows must show at least one card".to_string(),
            ));
        }
        if self.submit_delay_ms > 30_000 {
            return Err(CoreError::Config(format!(
                "submit delay of {}ms is longer than any request timeout",
                self.submit_delay_ms
            )));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn testimonial_autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.testimonial_autoplay_interval_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> CoreResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("{key} must be a non-negative integer, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(config.best_seller_window, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("ISMART_AUTOPLAY_MS", "7000"),
            ("ISMART_SUBMIT_DELAY_MS", " 1500 "),
        ]))
        .unwrap();
        assert_eq!(config.autoplay_interval_ms, 7000);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.press_window, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = WidgetConfig::from_lookup(lookup(&[("ISMART_PRESS_WINDOW", "three")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let err = WidgetConfig::from_lookup(lookup(&[("ISMART_BEST_SELLER_WINDOW", "0")])).unwrap_err();
        assert!(err.to_string().contains("at least one card"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"press_window": 2}"#).unwrap();
        assert_eq!(config.press_window, 2);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    }
}
