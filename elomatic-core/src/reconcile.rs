/// Merge a new ordered list of titles against the previous collection.
///
/// Pure function. The store decides whether to commit the result.
use std::collections::{HashMap, HashSet};

use crate::types::Item;

/// Build the collection described by `lines`, carrying state over from `previous`.
///
/// Lines are trimmed and blank ones skipped. A title that matches an item in
/// `previous` (exact, first match wins) keeps that item's score and
/// comparisons; anything else starts fresh. Matching only ever looks at
/// `previous`, so a title repeated in `lines` copies the same source item each
/// time. Items of `previous` whose title does not appear are dropped.
pub fn reconcile<I, S>(previous: &[Item], lines: I) -> Vec<Item>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut by_title: HashMap<&str, &Item> = HashMap::with_capacity(previous.len());
    for item in previous {
        by_title.entry(item.title()).or_insert(item);
    }

    lines
        .into_iter()
        .filter_map(|line| {
            let title = line.as_ref().trim();
            if title.is_empty() {
                return None;
            }
            Some(match by_title.get(title) {
                Some(&existing) => existing.clone(),
                None => Item::new(title),
            })
        })
        .collect()
}

/// How many items of `previous` have no title left in `rebuilt`.
pub fn dropped_count(previous: &[Item], rebuilt: &[Item]) -> usize {
    let kept: HashSet<&str> = rebuilt.iter().map(|item| item.title()).collect();
    previous.iter().filter(|item| !kept.contains(item.title())).count()
}
