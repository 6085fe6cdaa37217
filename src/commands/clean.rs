//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Pressmark;

/// Remove generated output; persisted preferences are left alone
pub fn run(site: &Pressmark) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
