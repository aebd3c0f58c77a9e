//! Free-text query matching across package fields.

use crate::package::PackageEntry;

/// Decide whether `entry` belongs in the result set for `terms`.
///
/// An empty term list matches everything. Otherwise the entry matches when
/// any term occurs, case-insensitively, as a substring of the derived short
/// name, description, repo id, or home page URL, checked in that order with
/// an early return on the first hit.
///
/// Terms are expected pre-lowercased; the CLI folds the whole argument list
/// once at parse time.
pub fn matches(terms: &[String], entry: &PackageEntry) -> bool {
    if terms.is_empty() {
        return true;
    }

    // A degenerate repo id yields no short name; the remaining fields are
    // still checked.
    let fields = [
        entry.short_name(),
        Some(entry.description.as_str()),
        Some(entry.repo.as_str()),
        Some(entry.href.as_str()),
    ];

    fields.into_iter().flatten().any(|field| {
        let folded = field.to_lowercase();
        terms.iter().any(|term| folded.contains(term.as_str()))
    })
}
