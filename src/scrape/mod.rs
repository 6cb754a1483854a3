// src/scrape/mod.rs
mod disambig;
mod infobox;
mod summary;

pub use disambig::DisambigOption;
pub use infobox::{InfoFact, InfoItem};

use scraper::{ElementRef, Html};

use crate::core::sanitize::normalize_ws;
use crate::params::DISAMBIG_MARKER;

/// One fetch cycle's result. Built per page, never mutated.
pub struct Page {
    pub url: String,
    /// First paragraph of body text; `None` when the page has no paragraph.
    pub summary: Option<String>,
    pub data: PageData,
}

pub enum PageData {
    /// A concrete article. `None` = no infobox table on the page;
    /// `Some(vec![])` = infobox present but no row produced a fact.
    Article(Option<Vec<InfoItem>>),
    Disambiguation(Vec<DisambigOption>),
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        matches!(self.data, PageData::Disambiguation(_))
    }
}

/// Classify one fetched document. Pure: same HTML in, same page out.
pub fn extract(url: String, html: &str) -> Page {
    let doc = Html::parse_document(html);
    let summary = summary::first_paragraph(&doc);

    if summary.as_deref().is_some_and(|s| s.contains(DISAMBIG_MARKER)) {
        let options = disambig::list_options(&doc);
        // A marker hit with zero usable options falls through as an article.
        if !options.is_empty() {
            return Page { url, summary, data: PageData::Disambiguation(options) };
        }
    }

    let infobox = infobox::extract(&doc);
    Page { url, summary, data: PageData::Article(infobox) }
}

/// Visible text of an element, whitespace-normalized.
fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
