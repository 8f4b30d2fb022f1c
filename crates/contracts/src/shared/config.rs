use crate::shared::pagination::{DEFAULT_MAX_BUTTONS, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Dashboard settings. Every field has a default, so a host page only needs
/// to override what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix of all backend endpoints
    pub api_root: String,
    pub page_size: usize,
    pub max_page_buttons: usize,
    /// Delay before editor change notifications start counting as edits
    pub grace_delay_ms: u32,
    pub title_debounce_ms: u32,
    pub search_debounce_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_root: "/dashboard/api".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_page_buttons: DEFAULT_MAX_BUTTONS,
            grace_delay_ms: 1000,
            title_debounce_ms: 500,
            search_debounce_ms: 300,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: DashboardConfig = serde_json::from_str(json)?;
        config.api_root = config.api_root.trim_end_matches('/').to_string();
        config.page_size = config.page_size.max(1);
        config.max_page_buttons = config.max_page_buttons.max(1);
        Ok(config)
    }

    /// Full endpoint path for `path` (which starts with `/`)
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_root, "/dashboard/api");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.max_page_buttons, 9);
        assert_eq!(config.grace_delay_ms, 1000);
        assert_eq!(config.title_debounce_ms, 500);
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json(r#"{ "api_root": "/cms/api/", "page_size": 10 }"#)
            .unwrap();
        assert_eq!(config.api_root, "/cms/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_page_buttons, 9);
        assert_eq!(config.endpoint("/article/1"), "/cms/api/article/1");
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = DashboardConfig::from_json(r#"{ "page_size": 0 }"#).unwrap();
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(DashboardConfig::from_json("{ page_size: ").is_err());
    }
}
