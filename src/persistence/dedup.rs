// * Ordered Deduplication
// * Keeps the first occurrence of each entry and preserves input order

use std::collections::HashSet;

/// Removes repeated entries, keeping each at its first position
pub fn dedup_ordered<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
