//! Site configuration lookup.
//!
//! A page may override the embedded defaults with
//! `<script type="text/toml" id="site-config">…</script>`.

use contracts::shared::config::{load_config, SiteConfig};
use log::LevelFilter;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load_site_config() -> SiteConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match load_config(inline.as_deref()) {
        Ok(config) => {
            if inline.is_some() {
                log::info!("site config: using inline override");
            }
            config
        }
        Err(e) => {
            log::warn!("site config: inline override ignored: {:#}", e);
            SiteConfig::default()
        }
    }
}

pub fn level_filter(config: &SiteConfig) -> LevelFilter {
    config.log_level.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let mut config = SiteConfig::default();
        assert_eq!(level_filter(&config), LevelFilter::Debug);
        config.log_level = "WARN".to_string();
        assert_eq!(level_filter(&config), LevelFilter::Warn);
        config.log_level = "loud".to_string();
        assert_eq!(level_filter(&config), LevelFilter::Info);
    }
}
