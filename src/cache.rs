//! Memo of per-element lookups.
//!
//! Finding the value a property was authored with (say `var(--primary)`
//! rather than the computed `rgb(…)`) means scanning style sheets, so
//! the answer is kept per element.  Entries live until [`clear`]
//! (page teardown); styles are not expected to change in between.
//!
//! [`clear`]: ResolvedCache::clear

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-through cache keyed by a stable element identifier.
#[derive(Clone, Debug)]
pub struct ResolvedCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for ResolvedCache<K, V> {
    fn default() -> Self { ResolvedCache { entries: HashMap::new() } }
}

impl<K: Eq + Hash + Debug, V> ResolvedCache<K, V> {
    pub fn new() -> Self { Self::default() }

    /// Return the value for `key`, calling `resolve` only on the first
    /// request.
    pub fn get_or_resolve<F>(&mut self, key: K, resolve: F) -> &V
    where F: FnOnce(&K) -> V {
        self.entries.entry(key).or_insert_with_key(|k| {
            tracing::trace!(key = ?k, "resolving");
            resolve(k)
        })
    }

    /// The value for `key`, if already resolved.
    pub fn get(&self, key: &K) -> Option<&V> { self.entries.get(key) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Forget every entry.
    pub fn clear(&mut self) { self.entries.clear() }
}
