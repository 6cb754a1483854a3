// src/resolve.rs
//
// Interactive resolution: fetch, and while the result is a disambiguation
// page, let the user pick a candidate and fetch again. Two states only:
// resolving (holds a URL) and resolved (returns the page).
use dialoguer::Input;
use url::Url;

use crate::error::ScrapeError;
use crate::net;
use crate::params::{ARTICLE_PREFIX, WIKI_ORIGIN};
use crate::render;
use crate::scrape::{self, DisambigOption, Page, PageData};

/// `https://<origin>/w/<term>` with the term percent-encoded as a single
/// path segment (spaces become `%20`).
pub fn search_url(term: &str) -> Result<Url, ScrapeError> {
    let mut url = Url::parse(WIKI_ORIGIN)?;
    url.path_segments_mut()
        .expect("origin is a valid base url")
        .pop_if_empty()
        .extend([ARTICLE_PREFIX, term]);
    Ok(url)
}

/// Fetch until a concrete page is reached.
pub fn process_search(term: &str) -> Result<Page, ScrapeError> {
    let mut url = search_url(term)?.to_string();

    loop {
        let fetched = net::fetch(&url)?;
        let page = scrape::extract(fetched.final_url, &fetched.html);

        let options = match &page.data {
            PageData::Disambiguation(options) => options,
            PageData::Article(_) => return Ok(page),
        };

        render::disambiguation(page.summary.as_deref().unwrap_or(""), options);
        url = prompt_choice(options)?;
        logf!("selected {url}");
    }
}

/// What one line of choice input means.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Select(usize),
    Quit,
    OutOfRange,
    NotANumber,
}

/// Classify one line of input against the number of listed options.
/// Pure; the prompt loop decides what each outcome does.
fn parse_choice(line: &str, option_count: usize) -> Choice {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    match line.parse::<i64>() {
        // try_from rejects negatives and values past usize on any target.
        Ok(n) => match usize::try_from(n) {
            Ok(n) if (1..=option_count).contains(&n) => Choice::Select(n),
            _ => Choice::OutOfRange,
        },
        Err(_) => Choice::NotANumber,
    }
}

/// Block for one choice. Out-of-range and non-numeric input re-prompt
/// without limit; `q` exits the whole process with status 0.
fn prompt_choice(options: &[DisambigOption]) -> Result<String, ScrapeError> {
    loop {
        let line: String = Input::new()
            .with_prompt("Enter the number of your choice (or 'q' to quit)")
            .interact_text()?;

        match parse_choice(&line, options.len()) {
            Choice::Select(n) => {
                // Relative hrefs resolve against the bare origin.
                return Ok(format!("{WIKI_ORIGIN}{}", options[n - 1].href));
            }
            Choice::Quit => {
                render::exit_notice();
                std::process::exit(0);
            }
            Choice::OutOfRange => render::invalid_choice(),
            Choice::NotANumber => render::invalid_input(),
        }
    }
}
