use once_cell::sync::{Lazy, OnceCell};
use serde::Deserialize;

use crate::error::Result;

/// Every tunable constant of the page. Any field missing from the page's
/// `#page-config` block keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Scroll offset in px above which the nav bar gets `nav-scrolled`.
    pub nav_scroll_threshold: f64,
    pub counter_duration_ms: u32,
    /// Delay of the simulated waitlist submission.
    pub submit_delay_ms: u32,
    pub error_display_ms: u32,
    pub shake_ms: u32,
    pub consent_delay_ms: u32,
    pub banner_show_delay_ms: u32,
    pub banner_fade_ms: u32,
    pub consent_storage_key: String,
    pub observer_threshold: f64,
    pub observer_root_margin: String,
    /// Per-orb parallax multiplier; orb `i` moves `(i + 1) * step` px at the edges.
    pub parallax_speed_step: f64,
    /// When set, submissions are POSTed here instead of being simulated.
    pub waitlist_endpoint: Option<String>,
    pub scroll_progress: bool,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: 50.0,
            counter_duration_ms: 2000,
            submit_delay_ms: 1500,
            error_display_ms: 3000,
            shake_ms: 500,
            consent_delay_ms: 2000,
            banner_show_delay_ms: 100,
            banner_fade_ms: 300,
            consent_storage_key: "cookieConsent".to_string(),
            observer_threshold: 0.1,
            observer_root_margin: "0px 0px -50px 0px".to_string(),
            parallax_speed_step: 20.0,
            waitlist_endpoint: None,
            scroll_progress: false,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static CONFIG: OnceCell<PageConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<PageConfig> = Lazy::new(PageConfig::default);

/// Install the page configuration. Only the first call wins.
pub fn init(config: PageConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("Page config already initialised, ignoring");
    }
}

pub fn get() -> &'static PageConfig {
    CONFIG.get().unwrap_or(&DEFAULT_CONFIG)
}
