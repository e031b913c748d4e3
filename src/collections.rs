//! Small helpers over string sequences, sets and maps.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

/// Removes repeated items, keeping the first occurrence of each value in order.
///
/// # Example
/// ```
/// use tool_util::collections::dedup_stable;
///
/// assert_eq!(dedup_stable(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// ```
pub fn dedup_stable<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    let mut data = Vec::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        if seen.insert(item) {
            data.push(item.to_string());
        }
    }
    data
}

/// Returns true if `target` equals one of `items` exactly.
pub fn contains<S: AsRef<str>>(items: &[S], target: &str) -> bool {
    items.iter().any(|item| item.as_ref() == target)
}

/// Returns true if any of `items` is the empty string.
pub fn contains_empty<S: AsRef<str>>(items: &[S]) -> bool {
    contains(items, "")
}

/// Collects the members of a set. The order is unspecified.
pub fn set_to_vec<H: BuildHasher>(set: &HashSet<String, H>) -> Vec<String> {
    set.iter().cloned().collect()
}

/// Collects the keys of a map. The order is unspecified.
pub fn map_keys<V, H: BuildHasher>(map: &HashMap<String, V, H>) -> Vec<String> {
    map.keys().cloned().collect()
}
