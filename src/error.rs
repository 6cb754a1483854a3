// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("bad wiki url: {0}")]
    Url(#[from] url::ParseError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
