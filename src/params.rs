// src/params.rs
use std::time::Duration;

pub const WIKI_ORIGIN: &str = "https://oldschool.runescape.wiki";
pub const ARTICLE_PREFIX: &str = "w";

/// Exact substring that flags a disambiguation summary.
pub const DISAMBIG_MARKER: &str = "may refer to:";

pub const USER_AGENT: &str = concat!("osrs_wiki/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const USAGE: &str = "Usage: osrs_wiki <search_term>";
