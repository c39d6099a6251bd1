//! Mapping from a key to a set of values.
//!
//! The key set of a [`Multimap`] never contains a key with an empty value set:
//! removing the last value of a key removes the key itself. [`crate::Graph`]
//! relies on this to answer "does this node have any edges" with a single
//! key lookup.

use std::hash::Hash;
use std::ops::ControlFlow;

use rustc_hash::FxHashMap;

use crate::set::Set;

#[derive(Debug, Clone)]
pub struct Multimap<K, V> {
    entries: FxHashMap<K, Set<V>>,
    len: usize,
}

impl<K, V> Default for Multimap<K, V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
            len: 0,
        }
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Multimap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `value` with `key`. Returns `true` if the pair is new.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let inserted = self.entries.entry(key).or_default().insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove the pair, dropping `key` entirely once its set is empty.
    /// Returns `true` if the pair was present.
    pub fn remove(&mut self, key: &K, value: &V) -> bool {
        let Some(values) = self.entries.get_mut(key) else {
            return false;
        };
        if !values.remove(value) {
            return false;
        }
        if values.is_empty() {
            self.entries.remove(key);
        }
        self.len -= 1;
        true
    }

    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.entries
            .get(key)
            .is_some_and(|values| values.contains(value))
    }

    /// True iff `key` maps to at least one value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&Set<V>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Total number of `(key, value)` pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    /// Visit every pair until the visitor breaks.
    ///
    /// Returns `ControlFlow::Break(())` if the visitor stopped early.
    pub fn for_each_pair<F>(&self, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&K, &V) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            visitor(key, value)?;
        }
        ControlFlow::Continue(())
    }
}

impl<K: Eq + Hash, V: Eq + Hash + Clone> Multimap<K, V> {
    /// Values associated with `key`, in unspecified order.
    pub fn values(&self, key: &K) -> Vec<V> {
        self.entries
            .get(key)
            .map(Set::to_vec)
            .unwrap_or_default()
    }
}

impl<K: Eq + Hash + Clone, V: Eq + Hash + Clone> Multimap<K, V> {
    /// Swap key and value roles of every pair. The receiver is untouched.
    pub fn inverse(&self) -> Multimap<V, K> {
        let mut inverse = Multimap::new();
        for (key, value) in self.iter() {
            inverse.insert(value.clone(), key.clone());
        }
        inverse
    }
}

impl<K: Eq + Hash, V: Eq + Hash> PartialEq for Multimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for Multimap<K, V> {}

impl<K: Eq + Hash, V: Eq + Hash> FromIterator<(K, V)> for Multimap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Extend<(K, V)> for Multimap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
