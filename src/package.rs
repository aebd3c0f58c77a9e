//! Normalized catalog model and the forward iterator over it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One registry catalog record.
///
/// Every field is present on a constructed entry (empty strings permitted);
/// the registry parser drops records missing any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageEntry {
    pub repo: String,
    pub href: String,
    pub description: String,
    pub category: String,
}

impl PackageEntry {
    /// Short package name: the segment after the last `/` in the repo id,
    /// or the whole id when there is no separator. `None` when the derived
    /// name would be empty.
    pub fn short_name(&self) -> Option<&str> {
        let name = self.repo.rsplit('/').next().unwrap_or(&self.repo);
        if name.is_empty() { None } else { Some(name) }
    }
}

/// The parsed catalog: an ordered, immutable sequence of entries.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<PackageEntry>,
}

impl Registry {
    /// Decode a raw registry payload.
    ///
    /// The payload must be a JSON array. Elements that fail to decode are
    /// skipped so a partially malformed catalog still yields the rest of
    /// its entries, in source order.
    pub fn parse(raw: &str) -> Result<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;

        let mut entries = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<PackageEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(err) => debug!("skipping malformed registry entry: {err}"),
            }
        }

        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<PackageEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forward cursor over the catalog in source order.
    pub fn iter(&self) -> PackageIter<'_> {
        PackageIter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a PackageEntry;
    type IntoIter = PackageIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Registry`].
///
/// Exhaustion is permanent: once `next` returns `None` it keeps returning
/// `None`.
pub struct PackageIter<'a> {
    inner: std::slice::Iter<'a, PackageEntry>,
}

impl<'a> Iterator for PackageIter<'a> {
    type Item = &'a PackageEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PackageIter<'_> {}
