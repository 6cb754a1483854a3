// src/scrape/infobox.rs
//
// Walks the infobox table row by row, threading the current section label
// through as running state. Output is an ordered stream of section markers
// and facts; the formatter decides how to display it.
use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::capitalize_first;

use super::text_of;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoFact {
    pub section: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoItem {
    /// Structural marker: a subheader row opened a new section.
    Section(String),
    Fact(InfoFact),
}

const DEFAULT_SECTION: &str = "General";

struct Selectors {
    tr: Selector,
    th: Selector,
    td: Selector,
    a: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            tr: Selector::parse("tr").unwrap(),
            th: Selector::parse("th").unwrap(),
            td: Selector::parse("td").unwrap(),
            a: Selector::parse("a").unwrap(),
        }
    }
}

/// Canonical class rule: substring match on any class token, so
/// `class="infobox plainlinks"` and `class="infobox-item"` both count.
/// The wiki templates are not consistent enough for exact matching.
fn has_class_like(el: ElementRef<'_>, token: &str) -> bool {
    el.value().classes().any(|c| c.contains(token))
}

/// Extract the fact stream from the first infobox table.
/// `None` = no infobox on the page; `Some(vec![])` = infobox present
/// but no row produced a fact.
pub fn extract(doc: &Html) -> Option<Vec<InfoItem>> {
    let table_sel = Selector::parse("table").unwrap();
    let table = doc.select(&table_sel).find(|t| has_class_like(*t, "infobox"))?;

    let sel = Selectors::new();
    let mut items = Vec::new();
    let mut section = s!(DEFAULT_SECTION);
    for row in table.select(&sel.tr) {
        section = process_row(row, section, &sel, &mut items);
    }
    Some(items)
}

/// Handle one row; returns the section label the next row inherits.
/// Branches are mutually exclusive in this precedence: subheader,
/// keyed, nested; anything else is skipped.
fn process_row(
    row: ElementRef<'_>,
    section: String,
    sel: &Selectors,
    out: &mut Vec<InfoItem>,
) -> String {
    let tds: Vec<ElementRef<'_>> = row.select(&sel.td).collect();

    if let Some(th) = row.select(&sel.th).next() {
        if has_class_like(th, "infobox-subheader") {
            let name = text_of(th);
            out.push(InfoItem::Section(name.clone()));
            return name;
        }

        let key = text_of(th);
        let value = resolve_value(row, &tds, sel);
        if !value.is_empty() {
            out.push(InfoItem::Fact(InfoFact { section: section.clone(), key, value }));
        }
        return section;
    }

    // Nested rows: all data cells, each flagged infobox-nested.
    if !tds.is_empty() && tds.iter().all(|td| has_class_like(*td, "infobox-nested")) {
        for td in &tds {
            let Some(param) = td.value().attr("data-attr-param") else { continue };
            let key = capitalize_first(param.trim());
            let value = text_of(*td);
            if !key.is_empty() && !value.is_empty() {
                out.push(InfoItem::Fact(InfoFact { section: section.clone(), key, value }));
            }
        }
    }
    section
}

/// First non-empty wins:
/// (a) data cell text, the normal case;
/// (b) link titles, for image-only fields like "Assigned by";
/// (c) every stripped text node in the row.
fn resolve_value(row: ElementRef<'_>, tds: &[ElementRef<'_>], sel: &Selectors) -> String {
    let cells = tds
        .iter()
        .map(|td| text_of(*td))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !cells.is_empty() {
        return cells;
    }

    let links = row
        .select(&sel.a)
        .filter_map(|link| {
            match link.value().attr("title").map(str::trim).filter(|t| !t.is_empty()) {
                Some(title) => Some(s!(title)),
                None => Some(text_of(link)).filter(|t| !t.is_empty()),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    if !links.is_empty() {
        return links;
    }

    row.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
