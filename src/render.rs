//! Terminal and JSON rendering of matched packages.

use crate::error::Result;
use crate::package::PackageEntry;
use colored::Colorize;

/// Print one match as a human-readable block.
///
/// The category field is deliberately not shown here; it only appears in
/// JSON output.
pub fn display_package(entry: &PackageEntry) {
    println!("  {}", entry.repo.cyan());
    println!("  url: {}", entry.href.dimmed());
    println!("  desc: {}", entry.description.dimmed());
    println!();
}

/// Serialize all matches as one pretty-printed JSON array.
pub fn to_json(matches: &[&PackageEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}
