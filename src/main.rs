// src/main.rs
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    osrs_wiki::cli::run()?;
    Ok(())
}
