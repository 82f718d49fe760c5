//! A wrapper around a sorted vector of tuples that TSON uses to represent
//! string-keyed aggregates.
//!
//! Keys are kept sorted and unique, so two maps decoded from the same entries
//! compare equal no matter what order the entries appeared in on the wire.
//!
//! # Example
//!
//! ```
//! use tson::prelude::*;
//!
//! let mut vmap = VecMap::new();
//!
//! vmap.insert(Bytes::from_static(b"b"), 2);
//! vmap.insert(Bytes::from_static(b"a"), 1);
//!
//! // inserting an existing key overwrites it
//! assert_eq!(vmap.insert(Bytes::from_static(b"a"), 3), Some(1));
//!
//! let keys: Vec<&Bytes> = vmap.keys().collect();
//! assert_eq!(keys, vec![&Bytes::from_static(b"a"), &Bytes::from_static(b"b")]);
//! ```

use std::{
    borrow::Borrow,
    collections::BTreeMap,
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
/// A map implemented as a sorted [`Vec`] of pairs.
///
/// See also: [module level documentation](`crate::vecmap`).
pub struct VecMap<K: Ord, V>(Vec<(K, V)>);

impl<K: Ord, V> VecMap<K, V> {
    /// Creates an empty [`VecMap`].
    pub fn new() -> Self { VecMap(Vec::new()) }

    /// Returns length.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`VecMap`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an [`Iter`] of the key value pairs, in key order.
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }

    /// Returns the keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> { self.0.iter().map(|(k, _)| k) }

    fn search<Q: ?Sized + Ord>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
    {
        self.0.binary_search_by(|(k, _)| k.borrow().cmp(key))
    }

    /// Inserts a pair, returning the previous value if `key` was present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(ix) => Some(std::mem::replace(&mut self.0[ix].1, value)),
            Err(ix) => {
                self.0.insert(ix, (key, value));
                None
            }
        }
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use tson::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![(Bytes::from_static(b"x"), 1)]);
    ///
    /// assert_eq!(vmap.get(&b"x"[..]), Some(&1));
    /// assert_eq!(vmap.get(&b"y"[..]), None);
    /// ```
    pub fn get<Q: ?Sized + Ord>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.search(key).ok().map(|ix| &self.0[ix].1)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove<Q: ?Sized + Ord>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        let ix = self.search(key).ok()?;
        Some(self.0.remove(ix).1)
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    /// Sorts the pairs; when a key repeats, the last pair wins.
    fn from(v: Vec<(K, V)>) -> Self { v.into_iter().collect() }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for VecMap<K, V> {
    fn from(bt: BTreeMap<K, V>) -> Self { VecMap(bt.into_iter().collect()) }
}

impl<K: Ord, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<'a, K: Ord, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> { self.0.iter() }
}

impl<K: Ord, V> FromIterator<(K, V)> for VecMap<K, V> {
    /// Sorts once instead of inserting pair by pair. Of pairs sharing a key, the last
    /// one wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        let mut pairs: Vec<(K, V)> = iter.into_iter().collect();
        // stable, so repeated keys stay in arrival order
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs.reverse();
        pairs.dedup_by(|(a, _), (b, _)| a == b);
        pairs.reverse();
        VecMap(pairs)
    }
}
