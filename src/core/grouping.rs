//! Grouping of ordered sequences into display buckets

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// A named group of entities sharing one key value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

/// Partition `items` by `key_fn`.
///
/// Buckets come out in the order their key is first seen, and members keep
/// their relative source order. Every item lands in exactly one bucket.
pub fn group_by_key<I, T, K, F>(items: I, mut key_fn: F) -> Vec<Bucket<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }

    groups
        .into_iter()
        .map(|(key, members)| Bucket { key, members })
        .collect()
}
