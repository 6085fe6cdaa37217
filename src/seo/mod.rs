//! SEO module - page metadata, social tags and structured data

mod composer;
mod descriptor;
mod head;
pub mod structured;

pub use composer::{compose, MetadataComposer, DEFAULT_FEED_PATH, ROBOTS_INDEX, ROBOTS_NOINDEX};
pub use descriptor::{ArticleFacts, ContentDescriptor, ContentType};
pub use head::{HeadTag, MetadataBundle};
pub use structured::{Schema, StructuredDataDocument};
