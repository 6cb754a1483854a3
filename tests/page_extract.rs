// tests/page_extract.rs
//
// End-to-end extraction over realistic page fixtures, through the same
// lib entry point the resolution loop uses.
use osrs_wiki::scrape::{self, InfoFact, InfoItem, PageData};

const ARTICLE: &str = include_str!("fixtures/dragon_dagger.html");
const DISAMBIG: &str = include_str!("fixtures/varrock_disambig.html");

fn fact(section: &str, key: &str, value: &str) -> InfoItem {
    InfoItem::Fact(InfoFact {
        section: section.into(),
        key: key.into(),
        value: value.into(),
    })
}

#[test]
fn article_page_extracts_summary_and_fact_stream() {
    let page = scrape::extract("https://oldschool.runescape.wiki/w/Dragon_dagger".into(), ARTICLE);

    assert!(!page.is_disambiguation());
    assert_eq!(
        page.summary.as_deref(),
        Some("The dragon dagger is the second-strongest dagger available in Old School RuneScape."),
    );

    let PageData::Article(Some(items)) = &page.data else {
        panic!("expected an article with an infobox");
    };
    assert_eq!(items, &vec![
        fact("General", "Dragon dagger", "Dragon dagger"),
        fact("General", "Released", "29 March 2004"),
        fact("General", "Members", "Yes"),
        InfoItem::Section("Combat stats".into()),
        fact("Combat stats", "Attack speed", "4 ticks"),
        fact("Combat stats", "Astab", "+20"),
        fact("Combat stats", "Aslash", "+10"),
        fact("Combat stats", "Assigned by", "Guild Master"),
    ]);
}

#[test]
fn disambiguation_page_lists_dense_options() {
    let page = scrape::extract("https://oldschool.runescape.wiki/w/Varrock".into(), DISAMBIG);

    assert!(page.is_disambiguation());
    assert_eq!(page.summary.as_deref(), Some("Varrock may refer to:"));

    let PageData::Disambiguation(options) = &page.data else {
        panic!("expected a disambiguation page");
    };
    let picked: Vec<(usize, &str, &str)> = options
        .iter()
        .map(|o| (o.index, o.label.as_str(), o.href.as_str()))
        .collect();
    assert_eq!(picked, vec![
        (1, "Varrock", "/w/Varrock_(city)"),
        (2, "Varrock Museum", "/w/Varrock_Museum"),
        (3, "Varrock teleport", "/w/Varrock_teleport"),
    ]);
    assert_eq!(options[0].description, "Varrock — the capital city of Misthalin");
}

#[test]
fn extraction_is_stable_across_runs() {
    let a = scrape::extract("u".into(), ARTICLE);
    let b = scrape::extract("u".into(), ARTICLE);
    match (&a.data, &b.data) {
        (PageData::Article(x), PageData::Article(y)) => assert_eq!(x, y),
        _ => panic!("expected articles"),
    }
    assert_eq!(a.summary, b.summary);
}
