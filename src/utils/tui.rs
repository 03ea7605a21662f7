//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use super::timer::TimeRecord;
use crate::registry::AlgorithmRegistry;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Sorting & Searching Times ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print a boxed title line above a table
pub fn print_title_box(title: &str) {
    let content_width = title.chars().count().min(get_term_width().saturating_sub(4).max(40));
    let border = "─".repeat(content_width + 2);
    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(title, content_width),
        width = content_width
    );
    println!("└{}┘", border);
}

/// Print a time table: one row per input size
pub fn print_time_table(records: &[TimeRecord]) {
    if records.is_empty() {
        return;
    }

    // N + four numeric columns, each right-aligned
    let col = (get_term_width().saturating_sub(4) / 5).clamp(8, 18);
    let table_width = col * 5 + 4;

    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
        "N",
        "Time (s)",
        "Avg OB",
        "Max OB",
        "Min OB",
        w = col
    );
    println!("  {}", "─".repeat(table_width));

    for r in records {
        println!(
            "  {:>w$} {:>w$.3e} {:>w$.2} {:>w$} {:>w$}",
            r.n,
            r.time,
            r.average_ob,
            r.max_ob,
            r.min_ob,
            w = col
        );
    }
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Sorting algorithms:");
    for algo in registry.sorters() {
        println!("  {:<22} - {}", algo.name(), algo.description());
    }
    println!();
    println!("Search methods:");
    for method in registry.searchers() {
        let note = if method.requires_sorted() {
            " (needs --sorted)"
        } else {
            ""
        };
        println!("  {:<22} - {}{}", method.name(), method.description(), note);
    }
    println!();
    println!("Key generators:");
    for generator in registry.generators() {
        println!("  {:<22} - {}", generator.name(), generator.description());
    }
}
