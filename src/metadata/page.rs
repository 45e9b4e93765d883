//! HTML document field extraction.
//!
//! [`PageContent`] walks the parsed document once and keeps owned strings,
//! so the non-`Send` DOM handle never has to live across an await point in
//! the extraction pipeline. Missing tags are not errors: each field
//! independently degrades to its empty default.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Compiles a selector at static init; panics on invalid expression.
fn compile_static_selector(expr: &str) -> Selector {
    Selector::parse(expr).unwrap_or_else(|e| panic!("invalid static selector '{expr}': {e:?}"))
}

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("title"));
static DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(r#"meta[name="description"]"#));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(r#"meta[property="og:description"]"#));
static KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(r#"meta[name="keywords"]"#));
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("h1, h2, h3"));

/// Fields extracted from one HTML document.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// `<title>` text, trimmed; empty when absent.
    pub title: String,
    /// First non-empty of `meta[name=description]` and
    /// `meta[property=og:description]`, trimmed; empty when neither present.
    pub description: String,
    /// `meta[name=keywords]` entries: comma/whitespace-split, lowercased.
    pub keywords: Vec<String>,
    /// Text of every `h1`/`h2`/`h3` element, in document order.
    pub headings: Vec<String>,
    /// Whitespace-joined text content of the document.
    pub text: String,
}

impl PageContent {
    /// Parses `html` and extracts every field in one pass.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);

        let title = doc
            .select(&TITLE_SELECTOR)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let description = meta_content(&doc, &DESCRIPTION_SELECTOR)
            .or_else(|| meta_content(&doc, &OG_DESCRIPTION_SELECTOR))
            .unwrap_or_default();

        let keywords = meta_content(&doc, &KEYWORDS_SELECTOR)
            .map(|raw| split_keywords(&raw))
            .unwrap_or_default();

        let headings = doc
            .select(&HEADING_SELECTOR)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|heading| !heading.is_empty())
            .collect();

        let text = doc.root_element().text().collect::<Vec<_>>().join(" ");

        Self {
            title,
            description,
            keywords,
            headings,
            text,
        }
    }
}

/// Returns the trimmed `content` attribute of the first match, if non-empty.
fn meta_content(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .find_map(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Splits a keywords attribute into lowercase topic tokens.
///
/// Entries are comma-separated; multi-word entries contribute one token per
/// word, so "machine learning" yields "machine" and "learning".
fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect()
}
