//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# pressmark configuration

# Identity
name: Tech & Leadership
tagline: Insights on Technology, Engineering, and Leadership
author:
  name: Your Name
  role: Engineering Leader & Tech Enthusiast
  bio: I write about software engineering, technology trends, and building high-performing teams.
  avatar: /static/avatar.jpg

social:
  twitter: https://twitter.com/yourhandle
  linkedin: https://www.linkedin.com/in/yourprofile
  github: https://github.com/yourusername
  email: hello@yourdomain.com

seo:
  default_image: /static/og-image.jpg
  twitter_handle: '@yourhandle'
  locale: en_US

# URL
url: http://example.com
feed_path: /feed.xml

# Directory
content_dir: content
public_dir: public
state_dir: .pressmark
"#;

/// Initialize a new site in the given directory
///
/// An existing configuration file is never overwritten.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content"))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    // Sample record in the shape the content API exports
    let now = chrono::Utc::now();
    let sample = serde_json::json!({
        "id": "hello-world",
        "title": "Hello World",
        "excerpt": "<p>Welcome! This is your very first post.</p>",
        "date": now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "uri": "/hello-world/",
        "author": { "node": { "name": "Your Name" } },
        "tags": { "nodes": [{ "name": "welcome" }] }
    });
    let sample_path = target_dir.join("content/hello-world.json");
    if !sample_path.exists() {
        fs::write(&sample_path, serde_json::to_string_pretty(&sample)?)?;
    }

    Ok(())
}
