// src/render.rs
//
// Console rendering. Row/panel builders are pure string functions so the
// layout logic is testable; the print_* wrappers add color on top.
use console::{measure_text_width, style};

use crate::scrape::{DisambigOption, InfoItem, Page, PageData};

const PANEL_WIDTH: usize = 96;

pub fn search_echo(term: &str) {
    println!("{} {term}", style("Searching for:").blue().bold());
}

/// Final page: URL and summary panels, then the infobox table if any.
pub fn page(page: &Page) {
    print_panel("Page URL", &page.url);
    print_panel("Summary", page.summary.as_deref().unwrap_or("No content found."));

    if let PageData::Article(Some(items)) = &page.data {
        if items.is_empty() {
            println!("{}", style("No relevant information found in infobox.").yellow());
        } else {
            print_infobox(items);
        }
    }
    // Infobox-absent pages print nothing further.
}

/// Disambiguation step: summary panel plus the numbered options table.
pub fn disambiguation(summary: &str, options: &[DisambigOption]) {
    print_panel("Disambiguation", summary);
    print_table("Options", ["Number", "Option", "Description"], &options_rows(options));
}

pub fn invalid_choice() {
    println!("{}", style("Invalid choice. Please try again.").red().bold());
}

pub fn invalid_input() {
    println!("{}", style("Invalid input. Please enter a number or 'q' to quit.").red().bold());
}

pub fn exit_notice() {
    println!("{}", style("Exiting.").red().bold());
}

/* ---------- row builders ---------- */

/// Infobox facts as Section/Key/Value rows. A fact whose section matches
/// the previously displayed one gets a blank section cell; this is
/// display-only, the fact stream keeps every section.
fn infobox_rows(items: &[InfoItem]) -> Vec<[String; 3]> {
    let mut rows = Vec::new();
    let mut last_shown: Option<&str> = None;

    for item in items {
        let InfoItem::Fact(f) = item else { continue };
        let section = if last_shown == Some(f.section.as_str()) { s!() } else { s!(&f.section) };
        rows.push([section, s!(&f.key), s!(&f.value)]);
        last_shown = Some(f.section.as_str());
    }
    rows
}

fn options_rows(options: &[DisambigOption]) -> Vec<[String; 3]> {
    options
        .iter()
        .map(|o| [o.index.to_string(), s!(&o.label), s!(&o.description)])
        .collect()
}

/* ---------- panels & tables ---------- */

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = s!();
    for word in text.split_whitespace() {
        if !line.is_empty() && measure_text_width(&line) + 1 + measure_text_width(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(s!());
    }
    lines
}

/// Boxed panel:
/// ╭─ Title ────╮
/// │ body text  │
/// ╰────────────╯
fn panel(title: &str, body: &str) -> String {
    // Display widths, not char counts: CJK and emoji glyphs are two
    // columns wide and would break the frame otherwise.
    let lines = wrap(body, PANEL_WIDTH);
    let longest = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let width = longest.max(measure_text_width(title) + 1);

    let mut out = String::new();
    let dashes = "─".repeat(width - measure_text_width(title) - 1);
    out.push_str(&format!("╭─ {title} {dashes}╮\n"));
    for line in &lines {
        out.push_str(&format!("│ {} │\n", pad_cell(line, width)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(width + 2)));
    out
}

fn print_panel(title: &str, body: &str) {
    println!("{}", panel(title, body));
}

fn print_infobox(items: &[InfoItem]) {
    print_table("# Infobox Information #", ["Section", "Key", "Value"], &infobox_rows(items));
}

/// Pad to a display width (wide glyphs count as two columns).
fn pad_cell(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(measure_text_width(text))))
}

/// Three-column table with padded plain cells; color goes on per column
/// after padding so widths stay honest.
fn print_table(title: &str, headers: [&str; 3], rows: &[[String; 3]]) {
    let mut widths = [0usize; 3];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = measure_text_width(h);
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    println!("{}", style(title).bold());
    println!(
        "{}  {}  {}",
        style(pad_cell(headers[0], widths[0])).magenta().bold(),
        style(pad_cell(headers[1], widths[1])).magenta().bold(),
        style(pad_cell(headers[2], widths[2])).magenta().bold(),
    );
    for row in rows {
        println!(
            "{}  {}  {}",
            style(pad_cell(&row[0], widths[0])).cyan(),
            style(pad_cell(&row[1], widths[1])).green(),
            style(pad_cell(&row[2], widths[2])).yellow(),
        );
    }
}
