use serde::{Deserialize, Serialize};

/// Options handed to the animate-on-scroll library at start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-in-out".to_string(),
            once: true,
        }
    }
}

/// Timing and threshold knobs for every scroll, timer and animation behaviour on the page.
///
/// All durations are milliseconds, all distances are CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Extra slack above a section's top (beyond the header) at which it becomes current.
    pub nav_threshold: f64,
    pub scroll_top_threshold: f64,
    pub parallax_factor: f64,
    pub skill_threshold: f64,
    pub reveal_threshold: f64,
    /// Seconds between consecutive characters of the text reveal.
    pub reveal_step: f64,
    pub bar_reset_delay: u64,
    pub typing: TypingConfig,
    pub splash_duration: u64,
    pub submit_delay: u64,
    pub notice_duration: u64,
    pub aos: AosOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay: u64,
    pub type_delay: u64,
    pub delete_delay: u64,
    pub hold_delay: u64,
    pub next_role_delay: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay: 1000,
            type_delay: 100,
            delete_delay: 50,
            hold_delay: 2000,
            next_role_delay: 500,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_threshold: 50.0,
            scroll_top_threshold: 300.0,
            parallax_factor: 0.2,
            skill_threshold: 0.3,
            reveal_threshold: 0.5,
            reveal_step: 0.03,
            bar_reset_delay: 100,
            typing: TypingConfig::default(),
            splash_duration: 1800,
            submit_delay: 1500,
            notice_duration: 3000,
            aos: AosOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override; any key left out keeps its default.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
