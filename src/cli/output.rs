//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use tabled::{Table, Tabled};

use crate::domain::{Match, Offer};

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Rank")]
    rank: String,
}

impl From<&Match> for MatchRow {
    fn from(m: &Match) -> Self {
        Self {
            item: m.display_name.clone(),
            price: or_dash(m.price),
            seller: or_dash(m.seller.as_deref()),
            status: or_dash(m.seller_status.as_deref()),
            rank: or_dash(m.rank),
        }
    }
}

impl From<&Offer> for MatchRow {
    fn from(o: &Offer) -> Self {
        Self {
            item: o.display_name.clone(),
            price: or_dash(o.price),
            seller: or_dash(o.seller.as_deref()),
            status: or_dash(o.seller_status.as_deref()),
            rank: or_dash(o.rank),
        }
    }
}

fn print_indented(table: &str) {
    for line in table.lines() {
        println!("  {line}");
    }
}

/// Print matches as a table.
pub fn matches(matches: &[Match]) {
    let rows: Vec<MatchRow> = matches.iter().map(MatchRow::from).collect();
    print_indented(&Table::new(rows).to_string());
}

/// Print offers as a table.
pub fn offers(offers: &[Offer]) {
    let rows: Vec<MatchRow> = offers.iter().map(MatchRow::from).collect();
    print_indented(&Table::new(rows).to_string());
}

/// One-line announcement of a new match.
pub fn new_match(m: &Match) {
    println!(
        "✓ {} for {}p from {} ({}, rank {})",
        m.display_name,
        or_dash(m.price),
        or_dash(m.seller.as_deref()),
        or_dash(m.seller_status.as_deref()),
        or_dash(m.rank),
    );
}
