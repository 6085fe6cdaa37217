//! schema.org structured data (JSON-LD)
//!
//! The document is a closed set of variants. Optional fields that are absent
//! are left out of the JSON entirely instead of being written as `null`.

use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Query placeholder used by search engines for the site search box
pub const SEARCH_TERM_PLACEHOLDER: &str = "{search_term_string}";

/// A complete JSON-LD document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredDataDocument {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(flatten)]
    pub schema: Schema,
}

impl StructuredDataDocument {
    pub fn new(schema: Schema) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema,
        }
    }

    /// Compact JSON, as embedded in the page head
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize structured data: {}", e);
            String::from("{}")
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self.schema {
            Schema::WebSite(_) => "WebSite",
            Schema::Article(_) => "Article",
            Schema::Person(_) => "Person",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum Schema {
    WebSite(WebSiteSchema),
    Article(ArticleSchema),
    Person(PersonSchema),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub author: PersonRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub author: PersonRef,
    pub publisher: Publisher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<WebPageRef>,
    /// Tags joined by `", "`; empty when there are none
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub same_as: Vec<String>,
}

/// Nested `Person` reference (author of a page)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PersonRef {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            url,
        }
    }
}

/// Article publisher; a person with a logo image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

impl Publisher {
    pub fn new(name: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            logo: ImageObject {
                kind: "ImageObject",
                url: logo_url.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl WebPageRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: "WebPage",
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

impl SearchAction {
    /// Site search rooted at `base_url`, e.g. `https://x.dev/search?q={search_term_string}`
    ///
    /// A trailing `/` on `base_url` is dropped before `/search` is appended,
    /// so a home page canonical of `https://x.dev/` does not yield `//search`.
    pub fn for_site(base_url: &str) -> Self {
        Self {
            kind: "SearchAction",
            target: EntryPoint {
                kind: "EntryPoint",
                url_template: format!(
                    "{}/search?q={}",
                    base_url.trim_end_matches('/'),
                    SEARCH_TERM_PLACEHOLDER
                ),
            },
            query_input: "required name=search_term_string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url_template: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_and_type_lead() {
        let doc = StructuredDataDocument::new(Schema::Person(PersonSchema {
            name: "Jane".to_string(),
            description: None,
            image: None,
            job_title: Some("CTO".to_string()),
            url: None,
            same_as: vec![],
        }));
        assert_eq!(
            doc.to_json(),
            r#"{"@context":"https://schema.org","@type":"Person","name":"Jane","jobTitle":"CTO","sameAs":[]}"#
        );
        assert_eq!(doc.type_name(), "Person");
    }

    #[test]
    fn test_search_action_shape() {
        let action = SearchAction::for_site("https://x.dev");
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["@type"], "SearchAction");
        assert_eq!(value["target"]["@type"], "EntryPoint");
        assert_eq!(
            value["target"]["urlTemplate"],
            "https://x.dev/search?q={search_term_string}"
        );
        assert_eq!(value["query-input"], "required name=search_term_string");

        let action = SearchAction::for_site("https://x.dev/");
        assert_eq!(
            action.target.url_template,
            "https://x.dev/search?q={search_term_string}"
        );
    }

    #[test]
    fn test_nested_refs() {
        let value = serde_json::to_value(Publisher::new("Jane", "/a.jpg")).unwrap();
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["logo"]["@type"], "ImageObject");
        assert_eq!(value["logo"]["url"], "/a.jpg");

        let value = serde_json::to_value(PersonRef::new("Jane", None)).unwrap();
        assert!(value.get("url").is_none());

        let value = serde_json::to_value(WebPageRef::new("https://x.dev/p")).unwrap();
        assert_eq!(value["@id"], "https://x.dev/p");
    }
}
