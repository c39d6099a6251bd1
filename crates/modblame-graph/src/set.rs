//! Unordered collection of unique values.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// A unique, unordered collection of comparable values.
///
/// Iteration order is unspecified. Callers that need a stable order must sort
/// the result of [`Set::to_vec`] themselves.
#[derive(Debug, Clone)]
pub struct Set<T> {
    values: FxHashSet<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self {
            values: FxHashSet::default(),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.values.insert(value)
    }

    /// Remove a value. Returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Return any member, or `None` when empty.
    pub fn any(&self) -> Option<&T> {
        self.values.iter().next()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Materialize the members as a vector in unspecified order.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
