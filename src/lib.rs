//! pressmark: head metadata and theme state for a headless blog front-end
//!
//! This crate composes page titles, robots directives, Open Graph and Twitter
//! tags, and schema.org structured data from content exported by a CMS. It
//! also keeps the reader's light/dark theme preference.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod seo;
pub mod theme;

use anyhow::Result;
use std::path::Path;

/// Configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main site handle
#[derive(Clone)]
pub struct Pressmark {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Exported content records
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Local state (persisted preferences)
    pub state_dir: std::path::PathBuf,
}

impl Pressmark {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let state_dir = base_dir.join(&config.state_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            state_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::init_site(&self.base_dir)
    }

    /// Generate head fragments for all content
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Theme store backed by the site's state directory
    pub fn theme_store(&self, prefers_dark: Option<bool>) -> theme::ThemeStore {
        theme::ThemeStore::new(theme::JsonFileStorage::in_dir(&self.state_dir), prefers_dark)
    }
}
