// * HTML -> Markdown Rendering
// * Drops page chrome (navigation, footers, share widgets), converts the rest with htmd,
// * then rewrites link and image targets to absolute URLs for the cleaning stage.

use htmd::options::{HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use regex::{Captures, Regex};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

// * Page chrome excluded by tag name
const EXCLUDED_TAGS: &[&str] = &["nav", "footer", "header", "aside"];

// * Elements that never carry readable content
const SKIPPED_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "svg", "iframe", "form", "button",
    "select", "input",
];

// * Page chrome excluded by class
static SELECTOR_EXCLUDED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        ".footer, .header, .navbar, .nav, .breadcrumbs, .social-share, .related-links, .cookie, .menu",
    )
    .expect("Invalid exclusion selector")
});

// * Target of a markdown link or image: `](target`
static LINK_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)\s]+)").expect("Invalid link target regex"));

/// Renders scraped HTML pages as markdown
pub struct MarkdownRenderer {
    base: Option<Url>,
    converter: HtmlToMarkdown,
}

impl MarkdownRenderer {
    /// Creates a renderer resolving relative links against `page_url`
    pub fn new(page_url: &str) -> Self {
        let converter = HtmlToMarkdown::builder()
            .skip_tags(EXCLUDED_TAGS.iter().chain(SKIPPED_TAGS).copied().collect())
            .options(Options {
                heading_style: HeadingStyle::Atx,
                ..Default::default()
            })
            .build();

        Self {
            base: Url::parse(page_url).ok(),
            converter,
        }
    }

    /// Renders the whole document
    pub fn render(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let stripped = strip_chrome(&document);

        let markdown = match self.converter.convert(&stripped) {
            Ok(markdown) => markdown,
            Err(e) => {
                // ! Conversion failed: fall back to the bare text so the page is not lost
                warn!(error = %e, "Markdown conversion failed, keeping plain text");
                document.root_element().text().collect::<String>()
            }
        };

        self.resolve_links(markdown.trim())
    }

    /// Rewrites every link and image target to an absolute URL
    fn resolve_links(&self, markdown: &str) -> String {
        LINK_TARGET
            .replace_all(markdown, |caps: &Captures| match self.resolve(&caps[1]) {
                Some(url) => format!("]({url}"),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Absolute URL for a link target, `None` for fragments and scripts
    fn resolve(&self, href: &str) -> Option<String> {
        if href.starts_with('#') || href.starts_with("javascript:") {
            return None;
        }

        let url = match &self.base {
            Some(base) => base.join(href).ok()?,
            None => Url::parse(href).ok()?,
        };
        Some(url.to_string())
    }
}

/// Serialized document with class-matched chrome removed
fn strip_chrome(document: &Html) -> String {
    let mut result = document.root_element().html();
    for element in document.select(&SELECTOR_EXCLUDED) {
        result = result.replace(&element.html(), "");
    }
    result
}

/// Convenience function for one-off rendering
pub fn html_to_markdown(html: &str, page_url: &str) -> String {
    MarkdownRenderer::new(page_url).render(html)
}
