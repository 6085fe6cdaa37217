//! URL helper functions

/// Join a base URL and a path with exactly one slash between them
///
/// # Examples
/// ```ignore
/// full_url("https://example.com/", "/posts/hello/") // -> "https://example.com/posts/hello/"
/// ```
pub fn full_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Canonical URL for a site path; `None` when either part is missing
pub fn canonical_url(base: &str, path: Option<&str>) -> Option<String> {
    if base.trim().is_empty() {
        return None;
    }
    let path = path?;
    if is_absolute(path) {
        return Some(path.to_string());
    }
    Some(full_url(base, path))
}

/// Whether a URL carries its own scheme or is protocol-relative
pub fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// Filesystem-safe relative output directory for a site path
///
/// Leading/trailing slashes and `.`/`..` segments are dropped.
pub fn output_dir(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .collect::<Vec<_>>()
        .join("/")
}
