//! Generator module - writes head fragments and the theme stylesheet

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentRecord;
use crate::helpers::output_dir;
use crate::seo::{MetadataBundle, MetadataComposer};
use crate::theme::palette::LIGHT;
use crate::Pressmark;

/// File written for each record
pub const HEAD_FILE: &str = "head.html";
/// Stylesheet served on first paint
pub const THEME_CSS_FILE: &str = "theme.css";

/// Counts from one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: usize,
    pub skipped: usize,
}

/// Renders head metadata for every content record
pub struct Generator<'a> {
    site: &'a Pressmark,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Pressmark) -> Self {
        Self { site }
    }

    fn composer(&self) -> MetadataComposer<'_> {
        MetadataComposer::new(&self.site.config.identity)
            .with_feed_path(&self.site.config.feed_path)
    }

    /// Compose metadata for a single record
    pub fn compose(&self, record: &ContentRecord) -> MetadataBundle {
        let descriptor = record.to_descriptor(&self.site.config.url);
        self.composer().compose(&descriptor)
    }

    /// Write every record's head fragment plus the theme stylesheet
    pub fn generate(&self, records: &[ContentRecord]) -> Result<GenerateReport> {
        fs::create_dir_all(&self.site.public_dir)?;

        let mut report = GenerateReport::default();
        for record in records {
            let Some(path) = record.path() else {
                tracing::warn!(
                    "Skipping record without uri or id: {:?}",
                    record.title.as_deref().unwrap_or("untitled")
                );
                report.skipped += 1;
                continue;
            };

            let target = self.head_path(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, self.compose(record).render())?;
            tracing::debug!("Generated: {:?}", target);
            report.written += 1;
        }

        self.write_theme_css()?;

        Ok(report)
    }

    /// Output location of a record's head fragment
    pub fn head_path(&self, path: &str) -> PathBuf {
        let dir = output_dir(path);
        if dir.is_empty() {
            self.site.public_dir.join(HEAD_FILE)
        } else {
            self.site.public_dir.join(dir).join(HEAD_FILE)
        }
    }

    /// Server-rendered markup always starts light
    fn write_theme_css(&self) -> Result<()> {
        let path = self.site.public_dir.join(THEME_CSS_FILE);
        fs::write(&path, LIGHT.stylesheet())?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }
}
