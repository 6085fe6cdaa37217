//! Rendered metadata bundle and its head elements

use serde::Serialize;

use super::structured::StructuredDataDocument;
use crate::helpers::{json_ld_script, link_tag, meta_media, meta_name, meta_property, title_tag};

/// One element in the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadTag {
    /// `<meta name=...>`
    Meta { name: &'static str, content: String },
    /// `<meta property=...>` (Open Graph and `article:*`)
    Property {
        property: &'static str,
        content: String,
    },
    /// `<meta name=... media=...>`
    MediaMeta {
        name: &'static str,
        content: String,
        media: &'static str,
    },
    Link {
        rel: &'static str,
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        mime: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl HeadTag {
    pub fn meta(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            name,
            content: content.into(),
        }
    }

    pub fn property(property: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Property {
            property,
            content: content.into(),
        }
    }

    pub fn link(rel: &'static str, href: impl Into<String>) -> Self {
        HeadTag::Link {
            rel,
            href: href.into(),
            mime: None,
            title: None,
        }
    }

    /// Key/value pair for meta elements; links have none
    pub fn meta_pair(&self) -> Option<(&'static str, &str)> {
        match self {
            HeadTag::Meta { name, content } => Some((*name, content.as_str())),
            HeadTag::Property { property, content } => Some((*property, content.as_str())),
            HeadTag::MediaMeta { name, content, .. } => Some((*name, content.as_str())),
            HeadTag::Link { .. } => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            HeadTag::Meta { name, content } => meta_name(name, content),
            HeadTag::Property { property, content } => meta_property(property, content),
            HeadTag::MediaMeta {
                name,
                content,
                media,
            } => meta_media(name, content, media),
            HeadTag::Link {
                rel,
                href,
                mime,
                title,
            } => link_tag(rel, href, *mime, title.as_deref()),
        }
    }
}

/// Everything a page head needs for search engines and social previews
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundle {
    /// Contents of `<title>`
    pub full_title: String,
    pub description: Option<String>,
    pub image: String,
    pub canonical: Option<String>,
    pub robots: &'static str,
    /// `og:type` value
    pub og_type: &'static str,
    pub tags: Vec<HeadTag>,
    pub structured_data: StructuredDataDocument,
}

impl MetadataBundle {
    /// Flat, ordered key/value list of every meta element
    pub fn meta_pairs(&self) -> Vec<(&'static str, &str)> {
        self.tags.iter().filter_map(HeadTag::meta_pair).collect()
    }

    /// First meta value for a key
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .filter_map(HeadTag::meta_pair)
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// All meta values for a key, e.g. every `article:tag`
    pub fn meta_all(&self, key: &str) -> Vec<&str> {
        self.tags
            .iter()
            .filter_map(HeadTag::meta_pair)
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .collect()
    }

    /// Serialized structured data
    pub fn json_ld(&self) -> String {
        self.structured_data.to_json()
    }

    /// HTML for the head region, one element per line
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.tags.len() + 2);
        lines.push(title_tag(&self.full_title));
        lines.extend(self.tags.iter().map(HeadTag::render));
        lines.push(json_ld_script(&self.json_ld()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_tag_render() {
        assert_eq!(
            HeadTag::meta("robots", "noindex, nofollow").render(),
            r#"<meta name="robots" content="noindex, nofollow">"#
        );
        assert_eq!(
            HeadTag::property("og:title", "A & B").render(),
            r#"<meta property="og:title" content="A &amp; B">"#
        );
        assert_eq!(
            HeadTag::link("canonical", "https://x.dev/").render(),
            r#"<link rel="canonical" href="https://x.dev/">"#
        );
    }

    #[test]
    fn test_meta_pair() {
        assert_eq!(
            HeadTag::meta("author", "Jane").meta_pair(),
            Some(("author", "Jane"))
        );
        assert_eq!(HeadTag::link("canonical", "/").meta_pair(), None);
    }
}
