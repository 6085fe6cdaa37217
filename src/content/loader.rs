//! Content loader - loads exported records from the content directory

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::ContentRecord;
use crate::Pressmark;

/// A record file holds either one record or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Many(Vec<ContentRecord>),
    One(Box<ContentRecord>),
}

/// Loads content records from the content directory
pub struct ContentLoader<'a> {
    site: &'a Pressmark,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Pressmark) -> Self {
        Self { site }
    }

    /// Load every record under the content directory, newest first
    pub fn load_records(&self) -> Result<Vec<ContentRecord>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_json_file(path) {
                match load_file(path) {
                    Ok(mut loaded) => records.append(&mut loaded),
                    Err(e) => {
                        tracing::warn!("Failed to load records from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Newest first; undated records go last
        records.sort_by(|a, b| b.published_at().cmp(&a.published_at()));

        Ok(records)
    }
}

/// Load the records in a single file
pub fn load_file(path: &Path) -> Result<Vec<ContentRecord>> {
    let content = fs::read_to_string(path)?;
    let records = match serde_json::from_str(&content)? {
        RecordFile::Many(records) => records,
        RecordFile::One(record) => vec![*record],
    };
    Ok(records)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_records() {
        let dir = TempDir::new().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(content_dir.join("posts")).unwrap();

        fs::write(
            content_dir.join("posts/old.json"),
            r#"{"title": "Old", "date": "2023-01-01"}"#,
        )
        .unwrap();
        fs::write(
            content_dir.join("batch.json"),
            r#"[{"title": "New", "date": "2024-06-01T12:00:00"}, {"title": "Undated", "kind": "page"}]"#,
        )
        .unwrap();
        fs::write(content_dir.join("broken.json"), "{").unwrap();
        fs::write(content_dir.join("notes.txt"), "ignored").unwrap();

        let site = Pressmark::new(dir.path()).unwrap();
        let records = ContentLoader::new(&site).load_records().unwrap();
        let titles: Vec<_> = records.iter().filter_map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let site = Pressmark::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&site).load_records().unwrap().is_empty());
    }
}
