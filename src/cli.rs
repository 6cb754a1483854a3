// src/cli.rs
use std::env;

use crate::error::ScrapeError;
use crate::params::USAGE;
use crate::{render, resolve};

/// All trailing arguments joined with spaces form the search term.
pub fn run() -> Result<(), ScrapeError> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        std::process::exit(0);
    }
    if args.is_empty() {
        println!("{USAGE}");
        std::process::exit(1);
    }

    let term = args.join(" ");
    render::search_echo(&term);

    let page = resolve::process_search(&term)?;
    render::page(&page);
    Ok(())
}
