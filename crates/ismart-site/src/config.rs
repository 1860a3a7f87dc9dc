//! Site configuration

use ismart_core::{CoreResult, WidgetConfig};
use once_cell::sync::OnceCell;

static CONFIG: OnceCell<SiteConfig> = OnceCell::new();

/// Server-side settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub widgets: WidgetConfig,
    pub assets_dir: String,
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            widgets: WidgetConfig::default(),
            assets_dir: "assets".to_string(),
            log_filter: "ismart_site=debug,ismart_core=info,tower_http=info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            widgets: WidgetConfig::from_lookup(&lookup)?,
            assets_dir: lookup("ISMART_ASSETS_DIR").unwrap_or(defaults.assets_dir),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Make this the process-wide configuration. Only the first call wins.
    pub fn install(self) -> bool {
        CONFIG.set(self).is_ok()
    }

    /// Installed configuration, or defaults when nothing was installed
    /// (always the case in the browser).
    pub fn global() -> &'static SiteConfig {
        CONFIG.get_or_init(SiteConfig::default)
    }
}

/// Widget settings for the current build target
pub fn widget_config() -> WidgetConfig {
    SiteConfig::global().widgets.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            "ISMART_ASSETS_DIR" => Some("/srv/ismart/assets".to_string()),
            "ISMART_SUBMIT_DELAY_MS" => Some("900".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.assets_dir, "/srv/ismart/assets");
        assert_eq!(config.widgets.submit_delay_ms, 900);
        assert_eq!(config.log_filter, SiteConfig::default().log_filter);
    }

    #[test]
    fn test_invalid_widget_value_fails() {
        let result = SiteConfig::from_lookup(|key| {
            (key == "ISMART_AUTOPLAY_MS").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }
}
