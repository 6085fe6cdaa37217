//! HTML helper functions for head elements

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NUMERIC_ENTITY: Regex = Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").unwrap();
}

/// Generate a `<title>` element
pub fn title_tag(title: &str) -> String {
    format!("<title>{}</title>", html_escape(title))
}

/// Generate a `<meta name=... content=...>` tag
///
/// # Examples
/// ```ignore
/// meta_name("robots", "noindex, nofollow") // -> <meta name="robots" content="noindex, nofollow">
/// ```
pub fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

/// Generate a `<meta property=... content=...>` tag (Open Graph style)
pub fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        html_escape(property),
        html_escape(content)
    )
}

/// Generate a media-scoped `<meta>` tag, e.g. `theme-color` per color scheme
pub fn meta_media(name: &str, content: &str, media: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}" media="{}">"#,
        html_escape(name),
        html_escape(content),
        html_escape(media)
    )
}

/// Generate a `<link>` tag
///
/// # Examples
/// ```ignore
/// link_tag("canonical", "https://example.com/post/", None, None)
/// ```
pub fn link_tag(rel: &str, href: &str, mime: Option<&str>, title: Option<&str>) -> String {
    let mime_attr = mime
        .map(|t| format!(r#" type="{}""#, html_escape(t)))
        .unwrap_or_default();
    let title_attr = title
        .map(|t| format!(r#" title="{}""#, html_escape(t)))
        .unwrap_or_default();

    format!(
        r#"<link rel="{}"{}{} href="{}">"#,
        html_escape(rel),
        mime_attr,
        title_attr,
        html_escape(href)
    )
}

/// Generate a JSON-LD script block
///
/// `</` is escaped so a string inside the JSON cannot close the script element.
pub fn json_ld_script(json: &str) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json.replace("</", "<\\/")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Decode the entities a CMS typically puts in excerpts
pub fn decode_entities(s: &str) -> String {
    let named = s
        .replace("&nbsp;", " ")
        .replace("&hellip;", "\u{2026}")
        .replace("&mdash;", "\u{2014}")
        .replace("&ndash;", "\u{2013}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&rsquo;", "\u{2019}")
        .replace("&ldquo;", "\u{201c}")
        .replace("&rdquo;", "\u{201d}")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">");

    let numeric = NUMERIC_ENTITY.replace_all(&named, |caps: &regex::Captures| {
        let code = &caps[1];
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        parsed
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    // `&amp;` last so `&amp;lt;` stays literal text
    numeric.replace("&amp;", "&")
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Turn an HTML fragment into a single line of plain text
pub fn plain_text(html: &str) -> String {
    collapse_whitespace(&decode_entities(&strip_html(html)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_tags() {
        assert_eq!(
            meta_name("description", r#"Say "hi" & <go>"#),
            r#"<meta name="description" content="Say &quot;hi&quot; &amp; &lt;go&gt;">"#
        );
        assert_eq!(
            meta_property("og:type", "article"),
            r#"<meta property="og:type" content="article">"#
        );
        assert!(meta_media("theme-color", "#fff", "(prefers-color-scheme: light)")
            .contains(r#"media="(prefers-color-scheme: light)""#));
    }

    #[test]
    fn test_link_tag() {
        assert_eq!(
            link_tag("canonical", "https://x.dev/a?b=1&c=2", None, None),
            r#"<link rel="canonical" href="https://x.dev/a?b=1&amp;c=2">"#
        );
        assert_eq!(
            link_tag(
                "alternate",
                "/feed.xml",
                Some("application/rss+xml"),
                Some("Blog RSS Feed")
            ),
            r#"<link rel="alternate" type="application/rss+xml" title="Blog RSS Feed" href="/feed.xml">"#
        );
    }

    #[test]
    fn test_json_ld_script() {
        let script = json_ld_script(r#"{"headline":"</script><b>"}"#);
        assert_eq!(
            script,
            r#"<script type="application/ld+json">{"headline":"<\/script><b>"}</script>"#
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text("<p>Teams that ship&nbsp;fast &amp; well&#8217;s secret&hellip;</p>\n"),
            "Teams that ship fast & well\u{2019}s secret\u{2026}"
        );
        assert_eq!(plain_text("  <p>\n</p> "), "");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&#x41;&#99999999;"), "A&#99999999;");
    }
}
