use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

/// Selector of the optional config element in the host page:
/// `<meta name="dashboard-config" content='{"page_size": 20}'>`
const CONFIG_META_SELECTOR: &str = r#"meta[name="dashboard-config"]"#;

/// Load dashboard configuration
///
/// Search order:
/// 1. `dashboard-config` meta element of the host page
/// 2. Falls back to built-in defaults
pub fn load_config() -> DashboardConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CONFIG_META_SELECTOR).ok().flatten())
        .and_then(|el| el.get_attribute("content"));

    let Some(content) = content else {
        log::info!("Using default dashboard configuration");
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json(&content) {
        Ok(config) => {
            log::info!("Loaded dashboard configuration: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Invalid dashboard-config, using defaults: {}", e);
            DashboardConfig::default()
        }
    }
}

/// Configuration provided by `App`
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}
