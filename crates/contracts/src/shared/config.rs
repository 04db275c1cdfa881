use serde::Deserialize;

/// Настройки сайта: тайминги формы, анимаций, навигации и группы reveal.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub form: FormConfig,
    pub motion: MotionConfig,
    pub nav: NavConfig,
    pub counters: CounterConfig,
    pub reveal: Vec<RevealGroupConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Latency of the simulated submission
    pub submit_delay_ms: u32,
    pub notice_hide_ms: u32,
    /// How the simulated submitter fails every request (or `none`)
    pub simulate_failure: SimulatedFailure,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedFailure {
    #[default]
    None,
    /// The service answers but refuses the request
    Rejected,
    /// The service cannot be reached
    Unavailable,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub counter_duration_ms: u32,
    pub ripple_duration_ms: u32,
    pub parallax_reset_ms: u32,
    pub tilt_max_deg: f64,
    pub tilt_lift_px: f64,
    pub long_press_ms: u32,
    pub toast_hide_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Distance below the viewport top at which a section counts as current
    pub header_offset_px: f64,
    /// Viewport width above which the burger menu is closed
    pub menu_breakpoint_px: f64,
    pub scrolled_after_px: f64,
    pub back_to_top_after_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub threshold: f64,
}

/// One reveal controller instance
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RevealGroupConfig {
    pub name: String,
    pub selector: String,
    pub threshold: f64,
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
    #[serde(default)]
    pub stagger_ms: u32,
}

fn default_root_margin() -> String {
    "0px".to_string()
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
log_level = "debug"

[form]
submit_delay_ms = 900
notice_hide_ms = 6000
simulate_failure = "none"

[motion]
counter_duration_ms = 1600
ripple_duration_ms = 550
parallax_reset_ms = 800
tilt_max_deg = 8.0
tilt_lift_px = 6.0
long_press_ms = 600
toast_hide_ms = 2500

[nav]
header_offset_px = 96.0
menu_breakpoint_px = 900.0
scrolled_after_px = 12.0
back_to_top_after_px = 600.0

[counters]
selector = "[data-count]"
threshold = 0.5

[[reveal]]
name = "sections"
selector = "[data-reveal]"
threshold = 0.15
root_margin = "0px 0px -60px 0px"

[[reveal]]
name = "headers"
selector = "[data-reveal-header]"
threshold = 0.5

[[reveal]]
name = "cards"
selector = "[data-reveal-card]"
threshold = 0.12
root_margin = "0px 0px -40px 0px"
stagger_ms = 80

[[reveal]]
name = "steps"
selector = "[data-reveal-step]"
threshold = 0.2
stagger_ms = 120

[[reveal]]
name = "testimonials"
selector = "[data-reveal-quote]"
threshold = 0.25
stagger_ms = 150

[[reveal]]
name = "lists"
selector = "[data-reveal-list] > li"
threshold = 0.08
stagger_ms = 60
"#;

impl SiteConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load configuration
///
/// Search order:
/// 1. Inline override supplied by the page (partial documents are fine)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<SiteConfig> {
    match override_toml.map(str::trim).filter(|s| !s.is_empty()) {
        Some(contents) => SiteConfig::from_toml(contents),
        None => SiteConfig::from_toml(DEFAULT_CONFIG),
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            form: FormConfig::default(),
            motion: MotionConfig::default(),
            nav: NavConfig::default(),
            counters: CounterConfig::default(),
            reveal: vec![
                RevealGroupConfig::new("sections", "[data-reveal]", 0.15, "0px 0px -60px 0px", 0),
                RevealGroupConfig::new("headers", "[data-reveal-header]", 0.5, "0px", 0),
                RevealGroupConfig::new("cards", "[data-reveal-card]", 0.12, "0px 0px -40px 0px", 80),
                RevealGroupConfig::new("steps", "[data-reveal-step]", 0.2, "0px", 120),
                RevealGroupConfig::new("testimonials", "[data-reveal-quote]", 0.25, "0px", 150),
                RevealGroupConfig::new("lists", "[data-reveal-list] > li", 0.08, "0px", 60),
            ],
        }
    }
}

impl RevealGroupConfig {
    pub fn new(name: &str, selector: &str, threshold: f64, root_margin: &str, stagger_ms: u32) -> Self {
        Self {
            name: name.to_string(),
            selector: selector.to_string(),
            threshold,
            root_margin: root_margin.to_string(),
            stagger_ms,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 900,
            notice_hide_ms: 6000,
            simulate_failure: SimulatedFailure::None,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 1600,
            ripple_duration_ms: 550,
            parallax_reset_ms: 800,
            tilt_max_deg: 8.0,
            tilt_lift_px: 6.0,
            long_press_ms: 600,
            toast_hide_ms: 2500,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 96.0,
            menu_breakpoint_px: 900.0,
            scrolled_after_px: 12.0,
            back_to_top_after_px: 600.0,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: "[data-count]".to_string(),
            threshold: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(
            r#"
            [form]
            simulate_failure = "rejected"
            "#,
        ))
        .unwrap();
        assert_eq!(config.form.simulate_failure, SimulatedFailure::Rejected);
        assert_eq!(config.form.submit_delay_ms, 900);
        assert_eq!(config.motion, MotionConfig::default());
        assert_eq!(config.reveal.len(), 6);
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(load_config(Some("  \n ")).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(load_config(Some("[form\nsubmit_delay_ms = ")).is_err());
        assert!(load_config(Some("[form]\nsubmit_delay_ms = \"soon\"")).is_err());
        assert!(load_config(Some("[form]\nsimulate_failure = true")).is_err());
        assert!(load_config(Some("[form]\nsimulate_failure = \"sometimes\"")).is_err());
    }

    #[test]
    fn test_reveal_thresholds_in_range() {
        for group in SiteConfig::default().reveal {
            assert!((0.08..=0.5).contains(&group.threshold), "{}", group.name);
        }
    }
}
