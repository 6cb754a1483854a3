// src/scrape/summary.rs
use scraper::{Html, Selector};

use super::text_of;

/// Text of the first `<p>` in document order, trimmed.
/// Pure query; absence is `None`, not an error.
pub fn first_paragraph(doc: &Html) -> Option<String> {
    let p = Selector::parse("p").unwrap();
    doc.select(&p).next().map(text_of)
}
