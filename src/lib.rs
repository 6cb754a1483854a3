// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod error;
pub mod net;
pub mod params;
pub mod render;
pub mod resolve;
pub mod scrape;
