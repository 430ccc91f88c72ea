//! Markdown image extraction for issue descriptions and attachments.
//!
//! No actual image analysis is performed; results carry a fixed placeholder
//! string so callers can see where analysis output would be attached.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholder recorded in place of real image analysis.
pub const IMAGE_ANALYSIS_PLACEHOLDER: &str = "Image analysis would go here";

static IMAGE_MARKDOWN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("valid image markdown regex"));

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp)$").expect("valid image extension regex")
});

/// An image referenced from markdown, with its analysis placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedImage {
    pub url: String,
    pub analysis: String,
}

/// Extract all markdown image references (`![alt](url)`) from a description.
pub fn extract_embedded_images(description: &str) -> Vec<EmbeddedImage> {
    IMAGE_MARKDOWN
        .captures_iter(description)
        .map(|capture| EmbeddedImage {
            url: capture[1].to_string(),
            analysis: IMAGE_ANALYSIS_PLACEHOLDER.to_string(),
        })
        .collect()
}

/// Whether a URL points at an image, judged by file extension alone.
pub fn is_image_url(url: &str) -> bool {
    IMAGE_EXTENSION.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_image() {
        let images = extract_embedded_images("See ![screenshot](http://x/img.png) above");
        assert_eq!(
            images,
            vec![EmbeddedImage {
                url: "http://x/img.png".to_string(),
                analysis: "Image analysis would go here".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_multiple_images() {
        let description = "![a](http://x/1.png)\nsome text\n![b](http://x/2.jpg)";
        let images = extract_embedded_images(description);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url, "http://x/1.png");
        assert_eq!(images[1].url, "http://x/2.jpg");
    }

    #[test]
    fn test_extract_empty_alt_text() {
        let images = extract_embedded_images("![](http://x/img.webp)");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "http://x/img.webp");
    }

    #[test]
    fn test_no_images() {
        assert!(extract_embedded_images("plain text, [a link](http://x)").is_empty());
        assert!(extract_embedded_images("").is_empty());
    }

    #[test]
    fn test_is_image_url_extensions() {
        assert!(is_image_url("http://x/a.png"));
        assert!(is_image_url("http://x/a.jpg"));
        assert!(is_image_url("http://x/a.jpeg"));
        assert!(is_image_url("http://x/a.gif"));
        assert!(is_image_url("http://x/a.webp"));
    }

    #[test]
    fn test_is_image_url_case_insensitive() {
        assert!(is_image_url("http://x/SHOT.PNG"));
        assert!(is_image_url("http://x/photo.JpEg"));
    }

    #[test]
    fn test_is_image_url_rejects_non_images() {
        assert!(!is_image_url("http://x/doc.pdf"));
        assert!(!is_image_url("http://x/archive.png.zip"));
        assert!(!is_image_url("http://x/noextension"));
    }
}
