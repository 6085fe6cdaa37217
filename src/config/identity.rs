//! Site identity: who runs the site and how it presents itself

use serde::{Deserialize, Serialize};

/// Site name used when none is configured
pub const DEFAULT_SITE_NAME: &str = "Blog";
/// Author name used when none is configured
pub const DEFAULT_AUTHOR_NAME: &str = "Author";
/// Social preview image used when neither the page nor the site provides one
pub const DEFAULT_SEO_IMAGE: &str = "/static/og-image.jpg";
/// Avatar used as the publisher logo when none is configured
pub const DEFAULT_AVATAR: &str = "/static/avatar.jpg";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Treat empty strings the same as missing values
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Process-wide, read-only description of the site
///
/// Every field is optional; the accessors below supply fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteIdentity {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub author: AuthorInfo,
    pub social: SocialLinks,
    pub seo: SeoDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
}

/// Social channel links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoDefaults {
    pub default_image: Option<String>,
    /// Handle used for `twitter:site` and `twitter:creator`, e.g. `@someone`
    pub twitter_handle: Option<String>,
    pub locale: Option<String>,
}

impl SiteIdentity {
    /// Identity with only a name, everything else left to fallbacks
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn site_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(DEFAULT_SITE_NAME)
    }

    pub fn tagline(&self) -> Option<&str> {
        non_empty(&self.tagline)
    }

    pub fn author_name(&self) -> &str {
        non_empty(&self.author.name).unwrap_or(DEFAULT_AUTHOR_NAME)
    }

    pub fn default_image(&self) -> &str {
        non_empty(&self.seo.default_image).unwrap_or(DEFAULT_SEO_IMAGE)
    }

    pub fn locale(&self) -> &str {
        non_empty(&self.seo.locale).unwrap_or(DEFAULT_LOCALE)
    }

    pub fn twitter_handle(&self) -> Option<&str> {
        non_empty(&self.seo.twitter_handle)
    }
}

impl SocialLinks {
    /// Profile URLs in fixed order: twitter, linkedin, github; blanks dropped
    pub fn same_as(&self) -> Vec<&str> {
        [&self.twitter, &self.linkedin, &self.github]
            .into_iter()
            .filter_map(non_empty)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks() {
        let identity = SiteIdentity::default();
        assert_eq!(identity.site_name(), "Blog");
        assert_eq!(identity.author_name(), "Author");
        assert_eq!(identity.default_image(), "/static/og-image.jpg");
        assert_eq!(identity.locale(), "en_US");
        assert_eq!(identity.tagline(), None);
        assert_eq!(identity.twitter_handle(), None);
    }

    #[test]
    fn test_empty_string_is_absent() {
        let mut identity = SiteIdentity::named("");
        identity.seo.locale = Some(String::new());
        assert_eq!(identity.site_name(), "Blog");
        assert_eq!(identity.locale(), "en_US");
    }

    #[test]
    fn test_same_as_order() {
        let social = SocialLinks {
            twitter: Some("T".to_string()),
            linkedin: Some("L".to_string()),
            github: None,
            email: Some("me@example.com".to_string()),
        };
        assert_eq!(social.same_as(), vec!["T", "L"]);

        let social = SocialLinks {
            twitter: Some(String::new()),
            github: Some("G".to_string()),
            ..Default::default()
        };
        assert_eq!(social.same_as(), vec!["G"]);
    }
}
