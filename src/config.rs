use crate::errors::PortalResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortalConfig {
    pub site_title: String,
    pub home_upcoming_limit: usize,
    pub home_announcement_limit: usize,
    pub contact_email: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            site_title: "Campus Connect Portal".to_string(),
            home_upcoming_limit: 4,
            home_announcement_limit: 5,
            contact_email: "contact@example.com".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn load(path: Option<&Path>) -> PortalResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), site_title = %config.site_title, "loaded portal config");
        Ok(config)
    }

    pub fn page_title(&self, prefix: &str) -> String {
        format!("{prefix} - {}", self.site_title)
    }

    pub fn error_title(&self) -> String {
        self.page_title("Error")
    }
}
