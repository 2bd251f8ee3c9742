//! Text transforms applied to a note before export.
//!
//! Both functions are total: they never fail and at worst return their
//! input unchanged.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::TagDescriptor;

/// Marker character that prefixes a tag.
pub const TAG_MARKER: char = '#';

// `---`, a heading line, a blank line, then everything after it.
#[allow(clippy::expect_used)]
static TAG_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---\n#[^\n]*\n\n([\s\S]*)").expect("tag header pattern"));

/// Strips a leading tag header block from raw note text.
///
/// When the header is found, returns the text after it with surrounding
/// whitespace trimmed. Otherwise returns `raw` exactly as given.
pub fn extract_content_after_tags(raw: &str) -> String {
    TAG_HEADER_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| raw.to_string(), |body| body.as_str().trim().to_string())
}

/// Removes the first marker character from each tag, keeping order.
pub fn strip_tag_markers(descriptors: &[TagDescriptor]) -> Vec<String> {
    descriptors
        .iter()
        .map(|d| d.tag.replacen(TAG_MARKER, "", 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_header() {
        assert_eq!(
            extract_content_after_tags("---\n#tag\n\nHello world"),
            "Hello world"
        );
    }

    #[test]
    fn test_no_header_is_identity() {
        assert_eq!(extract_content_after_tags("No header here"), "No header here");

        // No trimming when nothing matched.
        let raw = "  \nplain body with trailing space  \n";
        assert_eq!(extract_content_after_tags(raw), raw);
    }

    #[test]
    fn test_header_requires_blank_line() {
        let raw = "---\n#tag\nHello world";
        assert_eq!(extract_content_after_tags(raw), raw);
    }

    #[test]
    fn test_header_after_prior_content() {
        let raw = "title line\n---\n#a #b\n\n  Body\n\nSecond paragraph\n\n";
        assert_eq!(
            extract_content_after_tags(raw),
            "Body\n\nSecond paragraph"
        );
    }

    #[test]
    fn test_header_with_empty_body() {
        assert_eq!(extract_content_after_tags("---\n#tag\n\n"), "");
    }

    #[test]
    fn test_strip_tag_markers() {
        let tags = vec![TagDescriptor::new("#work"), TagDescriptor::new("#draft")];
        assert_eq!(strip_tag_markers(&tags), vec!["work", "draft"]);
    }

    #[test]
    fn test_strip_only_first_marker() {
        let tags = vec![
            TagDescriptor::new("#c#sharp"),
            TagDescriptor::new("plain"),
            TagDescriptor::new("nested/#x"),
        ];
        assert_eq!(strip_tag_markers(&tags), vec!["c#sharp", "plain", "nested/x"]);
    }

    #[test]
    fn test_strip_empty() {
        assert!(strip_tag_markers(&[]).is_empty());
    }
}
