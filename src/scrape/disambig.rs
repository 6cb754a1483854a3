// src/scrape/disambig.rs
use scraper::{ElementRef, Html, Selector};

use super::text_of;

/// One candidate page on a disambiguation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisambigOption {
    /// 1-based, dense over emitted options only.
    pub index: usize,
    pub label: String,
    /// Relative path, e.g. `/w/Varrock_(city)`.
    pub href: String,
    pub description: String,
}

/// List the candidate pages: direct `<li>` children of the first `<ul>`
/// inside the main content container. Nested lists are not flattened.
/// An item without a usable link is skipped without consuming an index.
pub fn list_options(doc: &Html) -> Vec<DisambigOption> {
    let content = Selector::parse("div.mw-parser-output").unwrap();
    let ul = Selector::parse("ul").unwrap();
    let a = Selector::parse("a").unwrap();

    let mut options = Vec::new();
    let Some(list) = doc.select(&content).next().and_then(|div| div.select(&ul).next()) else {
        return options;
    };

    let items = list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li");

    for li in items {
        let Some(link) = li.select(&a).next() else { continue };
        let Some(href) = link.value().attr("href") else { continue };
        options.push(DisambigOption {
            index: options.len() + 1,
            label: text_of(link),
            href: s!(href),
            description: text_of(li),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="mw-parser-output">{body}</div></body></html>"#
        ))
    }

    #[test]
    fn lists_linked_items_in_document_order() {
        let doc = doc(r#"
            <ul>
              <li><a href="/w/Varrock_(city)">Varrock</a> — the city</li>
              <li><a href="/w/Varrock_(music)">Varrock (music)</a> — the track</li>
            </ul>
        "#);
        let options = list_options(&doc);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].index, 1);
        assert_eq!(options[0].label, "Varrock");
        assert_eq!(options[0].href, "/w/Varrock_(city)");
        assert_eq!(options[0].description, "Varrock — the city");
        assert_eq!(options[1].index, 2);
        assert_eq!(options[1].href, "/w/Varrock_(music)");
    }

    #[test]
    fn unlinked_items_keep_indices_dense() {
        let doc = doc(r#"
            <ul>
              <li><a href="/w/A">A</a></li>
              <li>no link here</li>
              <li><a href="/w/B">B</a></li>
            </ul>
        "#);
        let options = list_options(&doc);
        let indices: Vec<usize> = options.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(options[1].href, "/w/B");
    }

    #[test]
    fn anchor_without_href_is_skipped() {
        let doc = doc(r#"<ul><li><a>dead anchor</a></li><li><a href="/w/C">C</a></li></ul>"#);
        let options = list_options(&doc);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].index, 1);
        assert_eq!(options[0].href, "/w/C");
    }

    #[test]
    fn nested_lists_are_not_flattened() {
        let doc = doc(r#"
            <ul>
              <li><a href="/w/A">A</a>
                <ul><li><a href="/w/A_sub">A sub</a></li></ul>
              </li>
              <li><a href="/w/B">B</a></li>
            </ul>
        "#);
        let options = list_options(&doc);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].href, "/w/A");
        assert_eq!(options[1].href, "/w/B");
    }

    #[test]
    fn only_the_first_list_is_considered() {
        let doc = doc(r#"
            <ul><li><a href="/w/A">A</a></li></ul>
            <ul><li><a href="/w/X">X</a></li></ul>
        "#);
        let options = list_options(&doc);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].href, "/w/A");
    }

    #[test]
    fn no_content_container_yields_nothing() {
        let doc = Html::parse_document("<html><body><ul><li><a href='/w/A'>A</a></li></ul></body></html>");
        assert!(list_options(&doc).is_empty());
    }
}
