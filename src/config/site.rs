//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::SiteIdentity;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Identity (name, tagline, author, social, seo)
    #[serde(flatten)]
    pub identity: SiteIdentity,

    // URL
    /// Public base URL, used to build canonical links
    pub url: String,
    pub feed_path: String,

    // Directory
    /// Exported content records (JSON)
    pub content_dir: String,
    pub public_dir: String,
    /// Durable local state such as the theme preference
    pub state_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            identity: SiteIdentity::default(),

            url: "http://example.com".to_string(),
            feed_path: "/feed.xml".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            state_dir: ".pressmark".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
