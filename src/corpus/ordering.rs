//! Numeric-aware ordering for chapter and verse keys
//!
//! Keys are compared as integers when both sides parse, otherwise as plain
//! strings. The same comparator is used for chapters and verses everywhere.

use std::cmp::Ordering;

/// Compare two chapter/verse keys
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Sort keys in place with [`compare_keys`]
///
/// The pairwise fallback is not transitive across mixed numeric and textual
/// keys, so this uses a stable insertion sort instead of `slice::sort_by`,
/// which may panic on a non-total order.
pub fn sort_keys<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare_keys(key(&items[j - 1]), key(&items[j])) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Return the given keys in numeric-aware order
pub fn sorted_keys<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = keys.into_iter().map(Into::into).collect();
    sort_keys(&mut out, |k| k.as_str());
    out
}
