//! Configuration module

mod identity;
mod site;

pub use identity::{
    AuthorInfo, SeoDefaults, SiteIdentity, SocialLinks, DEFAULT_AUTHOR_NAME, DEFAULT_AVATAR,
    DEFAULT_LOCALE, DEFAULT_SEO_IMAGE, DEFAULT_SITE_NAME,
};
pub(crate) use identity::non_empty;
pub use site::SiteConfig;
