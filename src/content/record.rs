//! Content records exported from the content API

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::{canonical_url, plain_text};
use crate::seo::{ArticleFacts, ContentDescriptor, ContentType};

/// What kind of page a record renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Post,
    Page,
    Profile,
}

/// GraphQL edge wrapper: `{"node": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<T> {
    pub node: T,
}

/// GraphQL connection wrapper: `{"nodes": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNode {
    pub name: Option<String>,
}

/// One post or page as the content API returns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    /// HTML excerpt
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub modified: Option<String>,
    /// Site-relative path, e.g. `/2024/01/hello/`
    pub uri: Option<String>,
    pub featured_image: Option<Node<ImageNode>>,
    pub author: Option<Node<NamedNode>>,
    pub tags: Option<Nodes<NamedNode>>,
    pub kind: RecordKind,
    pub noindex: bool,
}

impl ContentRecord {
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.node.name.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.featured_image
            .as_ref()
            .and_then(|i| i.node.source_url.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn tag_names(&self) -> Vec<String> {
        self.tags
            .iter()
            .flat_map(|t| t.nodes.iter())
            .filter_map(|n| n.name.clone())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Plain-text excerpt, `None` when there is nothing left after cleanup
    pub fn plain_excerpt(&self) -> Option<String> {
        self.excerpt
            .as_deref()
            .map(plain_text)
            .filter(|s| !s.is_empty())
    }

    /// Publication time, for ordering
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Path used for output files: the uri, or the id when there is none
    pub fn path(&self) -> Option<&str> {
        self.uri
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.id.as_deref())
    }

    /// Map onto the page-level input of metadata composition
    pub fn to_descriptor(&self, site_url: &str) -> ContentDescriptor {
        let (content_type, article) = match self.kind {
            RecordKind::Post => (
                ContentType::Article,
                Some(ArticleFacts {
                    published_time: self.date.as_deref().map(normalize_date),
                    modified_time: self.modified.as_deref().map(normalize_date),
                    author_name: self.author_name().map(str::to_string),
                    tags: self.tag_names(),
                }),
            ),
            RecordKind::Page => (ContentType::Website, None),
            RecordKind::Profile => (ContentType::Profile, None),
        };

        ContentDescriptor {
            title: self.title.clone(),
            description: self.plain_excerpt(),
            image_url: self.image_url().map(str::to_string),
            canonical_url: canonical_url(
                site_url,
                self.uri.as_deref().filter(|s| !s.is_empty()),
            ),
            content_type,
            article,
            suppress_indexing: self.noindex,
        }
    }
}

/// Parse the date shapes the content API emits; naive values are UTC
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// RFC 3339 form of a record date, or the input unchanged if it doesn't parse
///
/// Explicit offsets are kept as written.
pub fn normalize_date(s: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return dt.to_rfc3339_opts(SecondsFormat::Secs, false);
    }
    match parse_date(s) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, false),
        None => {
            tracing::debug!("Leaving unrecognized date as-is: {:?}", s);
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"{
        "id": "cG9zdDox",
        "title": "Leading Through Change",
        "excerpt": "<p>How teams adapt&hellip;</p>\n",
        "date": "2024-03-05T09:30:00",
        "modified": "2024-03-06T10:00:00+02:00",
        "uri": "/2024/03/leading-through-change/",
        "featuredImage": {"node": {"sourceUrl": "https://cdn.example.com/a.jpg", "altText": ""}},
        "author": {"node": {"name": "Jane Doe"}},
        "tags": {"nodes": [{"name": "leadership"}, {"name": ""}, {"name": "teams"}]}
    }"#;

    #[test]
    fn test_post_to_descriptor() {
        let record: ContentRecord = serde_json::from_str(POST).unwrap();
        assert_eq!(record.kind, RecordKind::Post);

        let descriptor = record.to_descriptor("https://blog.example.com/");
        assert_eq!(descriptor.content_type, ContentType::Article);
        assert_eq!(descriptor.title.as_deref(), Some("Leading Through Change"));
        assert_eq!(descriptor.description.as_deref(), Some("How teams adapt\u{2026}"));
        assert_eq!(
            descriptor.image_url.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(
            descriptor.canonical_url.as_deref(),
            Some("https://blog.example.com/2024/03/leading-through-change/")
        );
        assert!(!descriptor.suppress_indexing);

        let facts = descriptor.article_facts().unwrap();
        assert_eq!(facts.published_time.as_deref(), Some("2024-03-05T09:30:00+00:00"));
        assert_eq!(facts.modified_time.as_deref(), Some("2024-03-06T10:00:00+02:00"));
        assert_eq!(facts.author_name.as_deref(), Some("Jane Doe"));
        assert_eq!(facts.tags, vec!["leadership", "teams"]);
    }

    #[test]
    fn test_page_and_profile() {
        let page: ContentRecord =
            serde_json::from_str(r#"{"title": "About", "kind": "page", "noindex": true}"#).unwrap();
        let descriptor = page.to_descriptor("https://blog.example.com");
        assert_eq!(descriptor.content_type, ContentType::Website);
        assert!(descriptor.article.is_none());
        assert!(descriptor.suppress_indexing);
        assert_eq!(descriptor.canonical_url, None);
        assert_eq!(descriptor.description, None);

        let profile: ContentRecord =
            serde_json::from_str(r#"{"kind": "profile", "uri": "/about/"}"#).unwrap();
        let descriptor = profile.to_descriptor("https://blog.example.com");
        assert_eq!(descriptor.content_type, ContentType::Profile);
        assert_eq!(
            descriptor.canonical_url.as_deref(),
            Some("https://blog.example.com/about/")
        );
    }

    #[test]
    fn test_empty_excerpt_is_none() {
        let record = ContentRecord {
            excerpt: Some("<p> </p>".to_string()),
            ..Default::default()
        };
        assert_eq!(record.plain_excerpt(), None);
    }

    #[test]
    fn test_path_falls_back_to_id() {
        let record = ContentRecord {
            id: Some("42".to_string()),
            uri: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.path(), Some("42"));

        let descriptor = record.to_descriptor("https://blog.example.com");
        assert_eq!(descriptor.canonical_url, None);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2024-01-01"), "2024-01-01T00:00:00+00:00");
        assert_eq!(normalize_date("2024-01-01 08:15"), "2024-01-01T08:15:00+00:00");
        assert_eq!(normalize_date("2024-01-01T08:15:00Z"), "2024-01-01T08:15:00+00:00");
        assert_eq!(normalize_date("last tuesday"), "last tuesday");
    }
}
