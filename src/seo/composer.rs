//! Metadata composition
//!
//! A pure mapping from a [`ContentDescriptor`] and the [`SiteIdentity`] to a
//! [`MetadataBundle`]. Missing inputs degrade to fallbacks; composition never
//! fails. Fallbacks are tried left to right:
//!
//! | output      | sources                                              |
//! |-------------|------------------------------------------------------|
//! | full title  | title followed by the site name, site name           |
//! | description | descriptor description, site tagline, omitted        |
//! | image       | descriptor image, site default image, built-in image |

use super::descriptor::{ArticleFacts, ContentDescriptor, ContentType};
use super::head::{HeadTag, MetadataBundle};
use super::structured::{
    ArticleSchema, PersonRef, PersonSchema, Publisher, Schema, SearchAction,
    StructuredDataDocument, WebPageRef, WebSiteSchema,
};
use crate::config::{non_empty, SiteIdentity, DEFAULT_AVATAR};
use crate::theme::palette::{DARK, LIGHT};

/// Robots directive for pages that must stay out of search results
pub const ROBOTS_NOINDEX: &str = "noindex, nofollow";
/// Robots directive for everything else
pub const ROBOTS_INDEX: &str =
    "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";

pub const DEFAULT_FEED_PATH: &str = "/feed.xml";

/// Recommended social preview image size
const OG_IMAGE_WIDTH: &str = "1200";
const OG_IMAGE_HEIGHT: &str = "630";

/// Composes head metadata for one site
#[derive(Debug, Clone)]
pub struct MetadataComposer<'a> {
    identity: &'a SiteIdentity,
    feed_path: &'a str,
}

/// Compose with the default feed location
pub fn compose(descriptor: &ContentDescriptor, identity: &SiteIdentity) -> MetadataBundle {
    MetadataComposer::new(identity).compose(descriptor)
}

impl<'a> MetadataComposer<'a> {
    pub fn new(identity: &'a SiteIdentity) -> Self {
        Self {
            identity,
            feed_path: DEFAULT_FEED_PATH,
        }
    }

    /// Path advertised by the RSS alternate link
    pub fn with_feed_path(mut self, feed_path: &'a str) -> Self {
        self.feed_path = feed_path;
        self
    }

    pub fn compose(&self, descriptor: &ContentDescriptor) -> MetadataBundle {
        let identity = self.identity;
        let site_name = identity.site_name();
        let title = non_empty(&descriptor.title);

        let full_title = match title {
            Some(title) => format!("{} | {}", title, site_name),
            None => site_name.to_string(),
        };
        let description = non_empty(&descriptor.description)
            .or_else(|| identity.tagline())
            .map(str::to_string);
        let image = non_empty(&descriptor.image_url)
            .unwrap_or_else(|| identity.default_image())
            .to_string();
        let canonical = non_empty(&descriptor.canonical_url).map(str::to_string);
        let robots = if descriptor.suppress_indexing {
            ROBOTS_NOINDEX
        } else {
            ROBOTS_INDEX
        };
        let og_type = match descriptor.content_type {
            ContentType::Article => "article",
            ContentType::Website | ContentType::Profile => "website",
        };

        let fields = Fields {
            title,
            description: description.as_deref(),
            image: &image,
            canonical: canonical.as_deref(),
        };
        let structured_data = self.structured_data(descriptor, &fields);
        let tags = self.head_tags(descriptor, &fields, &full_title, robots, og_type);

        MetadataBundle {
            full_title,
            description,
            image,
            canonical,
            robots,
            og_type,
            tags,
            structured_data,
        }
    }

    fn structured_data(
        &self,
        descriptor: &ContentDescriptor,
        fields: &Fields,
    ) -> StructuredDataDocument {
        let schema = match descriptor.content_type {
            ContentType::Article => match descriptor.article_facts() {
                Some(facts) => Schema::Article(self.article(facts, fields)),
                None => Schema::WebSite(self.website(fields)),
            },
            ContentType::Profile => Schema::Person(self.person(fields)),
            ContentType::Website => Schema::WebSite(self.website(fields)),
        };
        StructuredDataDocument::new(schema)
    }

    fn article(&self, facts: &ArticleFacts, fields: &Fields) -> ArticleSchema {
        let identity = self.identity;
        let author_name = non_empty(&facts.author_name).unwrap_or_else(|| identity.author_name());
        let published = non_empty(&facts.published_time).map(str::to_string);
        let modified = non_empty(&facts.modified_time)
            .map(str::to_string)
            .or_else(|| published.clone());

        ArticleSchema {
            headline: fields.title.map(str::to_string),
            description: fields.description.map(str::to_string),
            image: fields.image.to_string(),
            author: PersonRef::new(
                author_name,
                non_empty(&identity.social.linkedin).map(str::to_string),
            ),
            publisher: Publisher::new(
                identity.author_name(),
                non_empty(&identity.author.avatar).unwrap_or(DEFAULT_AVATAR),
            ),
            date_published: published,
            date_modified: modified,
            main_entity_of_page: fields.canonical.map(WebPageRef::new),
            keywords: facts.tags.join(", "),
        }
    }

    fn person(&self, fields: &Fields) -> PersonSchema {
        let identity = self.identity;
        PersonSchema {
            name: identity.author_name().to_string(),
            description: non_empty(&identity.author.bio).map(str::to_string),
            image: non_empty(&identity.author.avatar).map(str::to_string),
            job_title: non_empty(&identity.author.role).map(str::to_string),
            url: fields.canonical.map(str::to_string),
            same_as: identity
                .social
                .same_as()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    fn website(&self, fields: &Fields) -> WebSiteSchema {
        let identity = self.identity;
        WebSiteSchema {
            name: identity.site_name().to_string(),
            description: fields.description.map(str::to_string),
            url: fields.canonical.map(str::to_string),
            author: PersonRef::new(identity.author_name(), None),
            potential_action: fields.canonical.map(SearchAction::for_site),
        }
    }

    fn head_tags(
        &self,
        descriptor: &ContentDescriptor,
        fields: &Fields,
        full_title: &str,
        robots: &'static str,
        og_type: &'static str,
    ) -> Vec<HeadTag> {
        let identity = self.identity;
        let site_name = identity.site_name();
        let short_title = fields.title.unwrap_or(site_name);
        let mut tags = Vec::new();

        // Primary
        tags.push(HeadTag::meta("title", full_title));
        if let Some(description) = fields.description {
            tags.push(HeadTag::meta("description", description));
        }
        tags.push(HeadTag::meta("author", identity.author_name()));
        tags.push(HeadTag::meta("robots", robots));
        if let Some(canonical) = fields.canonical {
            tags.push(HeadTag::link("canonical", canonical));
        }

        // Open Graph
        tags.push(HeadTag::property("og:type", og_type));
        tags.push(HeadTag::property("og:site_name", site_name));
        tags.push(HeadTag::property("og:locale", identity.locale()));
        tags.push(HeadTag::property("og:title", short_title));
        if let Some(description) = fields.description {
            tags.push(HeadTag::property("og:description", description));
        }
        tags.push(HeadTag::property("og:image", fields.image));
        tags.push(HeadTag::property("og:image:width", OG_IMAGE_WIDTH));
        tags.push(HeadTag::property("og:image:height", OG_IMAGE_HEIGHT));
        if let Some(canonical) = fields.canonical {
            tags.push(HeadTag::property("og:url", canonical));
        }

        if let Some(facts) = descriptor.article_facts() {
            if let Some(published) = non_empty(&facts.published_time) {
                tags.push(HeadTag::property("article:published_time", published));
            }
            if let Some(modified) = non_empty(&facts.modified_time) {
                tags.push(HeadTag::property("article:modified_time", modified));
            }
            if let Some(author) = non_empty(&facts.author_name) {
                tags.push(HeadTag::property("article:author", author));
            }
            for tag in &facts.tags {
                tags.push(HeadTag::property("article:tag", tag.as_str()));
            }
        }

        // Twitter
        tags.push(HeadTag::meta("twitter:card", "summary_large_image"));
        if let Some(handle) = identity.twitter_handle() {
            tags.push(HeadTag::meta("twitter:site", handle));
            tags.push(HeadTag::meta("twitter:creator", handle));
        }
        tags.push(HeadTag::meta("twitter:title", short_title));
        if let Some(description) = fields.description {
            tags.push(HeadTag::meta("twitter:description", description));
        }
        tags.push(HeadTag::meta("twitter:image", fields.image));
        if let Some(canonical) = fields.canonical {
            tags.push(HeadTag::meta("twitter:url", canonical));
        }

        // Browser chrome follows the page background of each palette
        for (palette, media) in [
            (&LIGHT, "(prefers-color-scheme: light)"),
            (&DARK, "(prefers-color-scheme: dark)"),
        ] {
            tags.push(HeadTag::MediaMeta {
                name: "theme-color",
                content: palette.background().to_string(),
                media,
            });
        }

        tags.push(HeadTag::Link {
            rel: "alternate",
            href: self.feed_path.to_string(),
            mime: Some("application/rss+xml"),
            title: Some(format!("{} RSS Feed", site_name)),
        });

        tags
    }
}

/// Resolved page-level values shared by the tags and the structured data
struct Fields<'d> {
    title: Option<&'d str>,
    description: Option<&'d str>,
    image: &'d str,
    canonical: Option<&'d str>,
}
