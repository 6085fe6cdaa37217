//! Content descriptor: the page-level input to metadata composition

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a page presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Website,
    Article,
    Profile,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Website => "website",
            ContentType::Article => "article",
            ContentType::Profile => "profile",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "website" => Ok(ContentType::Website),
            "article" => Ok(ContentType::Article),
            "profile" => Ok(ContentType::Profile),
            other => Err(format!(
                "Unknown content type: {}. Available: website, article, profile",
                other
            )),
        }
    }
}

/// Facts only articles carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleFacts {
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author_name: Option<String>,
    pub tags: Vec<String>,
}

/// Everything a page knows about itself for search engines and social previews
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDescriptor {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub canonical_url: Option<String>,
    pub content_type: ContentType,
    /// Only meaningful with [`ContentType::Article`]
    pub article: Option<ArticleFacts>,
    pub suppress_indexing: bool,
}

impl ContentDescriptor {
    /// Descriptor for a plain page
    pub fn website() -> Self {
        Self::default()
    }

    pub fn article(facts: ArticleFacts) -> Self {
        Self {
            content_type: ContentType::Article,
            article: Some(facts),
            ..Default::default()
        }
    }

    pub fn profile() -> Self {
        Self {
            content_type: ContentType::Profile,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_canonical(mut self, canonical_url: impl Into<String>) -> Self {
        self.canonical_url = Some(canonical_url.into());
        self
    }

    pub fn noindex(mut self) -> Self {
        self.suppress_indexing = true;
        self
    }

    /// Article facts, but only when this really is an article
    pub fn article_facts(&self) -> Option<&ArticleFacts> {
        match self.content_type {
            ContentType::Article => self.article.as_ref(),
            ContentType::Website | ContentType::Profile => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!("article".parse(), Ok(ContentType::Article));
        assert_eq!("Profile".parse(), Ok(ContentType::Profile));
        assert!("video".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_article_facts_gated_by_type() {
        let mut descriptor = ContentDescriptor::article(ArticleFacts::default());
        assert!(descriptor.article_facts().is_some());

        descriptor.content_type = ContentType::Profile;
        assert!(descriptor.article_facts().is_none());

        let descriptor = ContentDescriptor {
            content_type: ContentType::Article,
            ..Default::default()
        };
        assert!(descriptor.article_facts().is_none());
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{
            "title": "Hello",
            "contentType": "article",
            "article": {"publishedTime": "2024-01-01", "tags": ["rust"]},
            "suppressIndexing": true
        }"#;
        let descriptor: ContentDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.content_type, ContentType::Article);
        assert_eq!(descriptor.article_facts().unwrap().tags, vec!["rust"]);
        assert!(descriptor.suppress_indexing);
        assert_eq!(descriptor.canonical_url, None);
    }
}
