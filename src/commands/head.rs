//! Print the head metadata for one record

use anyhow::{Context, Result};
use std::path::Path;

use crate::content::loader::load_file;
use crate::generator::Generator;
use crate::seo::{ContentType, MetadataComposer};
use crate::Pressmark;

/// How the head command prints its result
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadOptions {
    /// Force `noindex, nofollow`
    pub noindex: bool,
    /// Override the content type derived from the record
    pub content_type: Option<ContentType>,
    /// Print the bundle as JSON instead of HTML
    pub json: bool,
}

/// Compose the first record in `record_path` and render it
pub fn render(site: &Pressmark, record_path: &Path, options: HeadOptions) -> Result<String> {
    let records = load_file(record_path)
        .with_context(|| format!("Failed to read record from {:?}", record_path))?;
    let record = records
        .first()
        .with_context(|| format!("No records in {:?}", record_path))?;

    let bundle = if options.noindex || options.content_type.is_some() {
        let mut descriptor = record.to_descriptor(&site.config.url);
        descriptor.suppress_indexing |= options.noindex;
        if let Some(content_type) = options.content_type {
            descriptor.content_type = content_type;
        }
        MetadataComposer::new(&site.config.identity)
            .with_feed_path(&site.config.feed_path)
            .compose(&descriptor)
    } else {
        Generator::new(site).compose(record)
    };

    if options.json {
        Ok(serde_json::to_string_pretty(&bundle)?)
    } else {
        Ok(bundle.render())
    }
}

/// Print the rendered head to stdout
pub fn run(site: &Pressmark, record_path: &Path, options: HeadOptions) -> Result<()> {
    println!("{}", render(site, record_path, options)?);
    Ok(())
}
