//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::loader::ContentLoader;
use crate::Pressmark;

/// List content records or their tags
pub fn run(site: &Pressmark, list_type: &str) -> Result<()> {
    let records = ContentLoader::new(site).load_records()?;

    match list_type {
        "record" | "records" | "post" | "posts" => {
            println!("Records ({}):", records.len());
            for record in &records {
                let date = record
                    .published_at()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!(
                    "  {} - {} [{:?}] {}",
                    date,
                    record.title.as_deref().unwrap_or("(untitled)"),
                    record.kind,
                    record.path().unwrap_or("-")
                );
            }
        }
        "tag" | "tags" => {
            let mut tags: HashMap<String, usize> = HashMap::new();
            for record in &records {
                for tag in record.tag_names() {
                    *tags.entry(tag).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: record, tag", list_type);
        }
    }

    Ok(())
}
