mod builder;

use std::borrow::Borrow;
use std::collections::hash_map::{self, DefaultHasher};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use itertools::Itertools;

use crate::variants::NamedVariants;
use crate::Error;

pub use builder::{BiMapBuilder, Collision};


/// Both directions of one construction. Never mutated once wrapped in an `Arc`.
#[derive(Debug)]
struct Tables<K, V> {
    forward: HashMap<K, V>,
    backward: HashMap<V, K>,
}

/// Which side of the shared [Tables] a handle exposes as its forward direction.
enum Orientation<K, V> {
    Empty,
    Forward(Arc<Tables<K, V>>),
    Backward(Arc<Tables<V, K>>),
}

/// Immutable bidirectional map of unique keys to unique values
///
/// A [BiMap] is a handle onto a shared, frozen pair of hash tables: one mapping keys to values and
/// one mapping values to keys. Cloning a handle bumps a reference count, [BiMap::reversed] hands
/// out the opposite orientation of the very same tables, so `map.reversed().reversed()` is the
/// original map again (see [BiMap::ptr_eq]).
///
/// Every map without entries is the allocation-free [BiMap::empty].
pub struct BiMap<K, V> {
    orientation: Orientation<K, V>,
}

impl<K, V> BiMap<K, V> {
    /// The canonical empty map.
    ///
    /// All empty maps of a type are [ptr_eq](BiMap::ptr_eq) to each other, regardless of how they
    /// were constructed.
    pub const fn empty() -> Self {
        Self {
            orientation: Orientation::Empty,
        }
    }

    pub(crate) fn from_tables(forward: HashMap<K, V>, backward: HashMap<V, K>) -> Self {
        debug_assert_eq!(forward.len(), backward.len());
        if forward.is_empty() {
            return Self::empty();
        }
        Self {
            orientation: Orientation::Forward(Arc::new(Tables { forward, backward })),
        }
    }

    /// This map, but reversed: keys become values and values become keys.
    ///
    /// The reversed map shares its tables with `self`; nothing is copied. Reversing is its own
    /// inverse, `map.reversed().reversed()` is [ptr_eq](BiMap::ptr_eq) to `map`, and reversing the
    /// same map twice yields two handles that are [ptr_eq](BiMap::ptr_eq) to each other.
    ///
    /// Holding on to either direction keeps the shared tables alive.
    pub fn reversed(&self) -> BiMap<V, K> {
        let orientation = match &self.orientation {
            Orientation::Empty => Orientation::Empty,
            Orientation::Forward(tables) => Orientation::Backward(Arc::clone(tables)),
            Orientation::Backward(tables) => Orientation::Forward(Arc::clone(tables)),
        };
        BiMap { orientation }
    }

    /// Returns true if both handles expose the same tables in the same orientation.
    ///
    /// This is identity, not equality: two maps built separately from the same pairs are equal but
    /// not `ptr_eq`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.orientation, &other.orientation) {
            (Orientation::Empty, Orientation::Empty) => true,
            (Orientation::Forward(this), Orientation::Forward(that)) => Arc::ptr_eq(this, that),
            (Orientation::Backward(this), Orientation::Backward(that)) => Arc::ptr_eq(this, that),
            _ => false,
        }
    }

    fn forward(&self) -> Option<&HashMap<K, V>> {
        match &self.orientation {
            Orientation::Empty => None,
            Orientation::Forward(tables) => Some(&tables.forward),
            Orientation::Backward(tables) => Some(&tables.backward),
        }
    }

    fn backward(&self) -> Option<&HashMap<V, K>> {
        match &self.orientation {
            Orientation::Empty => None,
            Orientation::Forward(tables) => Some(&tables.backward),
            Orientation::Backward(tables) => Some(&tables.forward),
        }
    }

    /// Number of key-value pairs.
    pub fn len(&self) -> usize {
        self.forward().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All mapped keys, each exactly once, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.forward().into_iter().flat_map(|forward| forward.keys())
    }

    /// All mapped values, each exactly once, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.backward()
            .into_iter()
            .flat_map(|backward| backward.keys())
    }

    /// All key-value pairs in no particular order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.forward().map(HashMap::iter),
        }
    }
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    /// Get the value mapped to `key`
    ///
    /// returns None if `key` is not mapped.
    pub fn value_for<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward()?.get(key)
    }

    /// Get the key mapped to `value`
    ///
    /// returns None if `value` is not mapped.
    pub fn key_for<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward()?.get(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.value_for(key).is_some()
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_for(value).is_some()
    }
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Builds a map from key-value pairs.
    ///
    /// A pair whose key or value was already seen replaces the earlier pair in both directions,
    /// so the last write wins. Use [BiMap::try_from_pairs] to reject such collisions instead.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut builder = BiMapBuilder::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            builder.insert(key, value);
        }
        builder.finish()
    }

    /// Builds a map from key-value pairs, failing on the first key or value seen twice.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut builder =
            BiMapBuilder::with_capacity(pairs.size_hint().0).on_collision(Collision::Reject);
        for (key, value) in pairs {
            builder.insert(key, value);
        }
        builder.build()
    }

    /// Builds a map from `values`, deriving each value's key with `derive_key`.
    ///
    /// `derive_key` is called exactly once per value. Collisions follow [BiMap::from_pairs].
    pub fn from_values<F, I>(mut derive_key: F, values: I) -> Self
    where
        F: FnMut(&V) -> K,
        I: IntoIterator<Item = V>,
    {
        Self::from_pairs(values.into_iter().map(|value| (derive_key(&value), value)))
    }

    /// Builds a map from `keys`, deriving each key's value with `derive_value`.
    ///
    /// `derive_value` is called exactly once per key. Collisions follow [BiMap::from_pairs].
    pub fn from_keys<F, I>(mut derive_value: F, keys: I) -> Self
    where
        F: FnMut(&K) -> V,
        I: IntoIterator<Item = K>,
    {
        Self::from_pairs(keys.into_iter().map(|key| {
            let value = derive_value(&key);
            (key, value)
        }))
    }
}

impl<K, V> BiMap<K, V>
where
    K: NamedVariants + Eq + Hash + Clone,
    V: NamedVariants + Eq + Hash + Clone,
{
    /// Pairs every variant of `K` with the variant of `V` carrying the same name.
    ///
    /// This is useful when two APIs ship their own enums with the same variants. Variants whose
    /// name has no counterpart on the other side are simply not mapped.
    pub fn from_paired_enums() -> Self {
        let keys = K::variants();
        if keys.is_empty() {
            return Self::empty();
        }

        Self::from_pairs(
            keys.iter()
                .cartesian_product(V::variants())
                .filter(|(key, value)| key.name() == value.name())
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}

impl<K, V> Clone for BiMap<K, V> {
    fn clone(&self) -> Self {
        let orientation = match &self.orientation {
            Orientation::Empty => Orientation::Empty,
            Orientation::Forward(tables) => Orientation::Forward(Arc::clone(tables)),
            Orientation::Backward(tables) => Orientation::Backward(Arc::clone(tables)),
        };
        Self { orientation }
    }
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> FromIterator<(K, V)> for BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

// The backward table is derived from the forward one, so only the forward table takes part in
// equality and hashing.
impl<K, V> PartialEq for BiMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.forward(), other.forward()) {
            (Some(this), Some(that)) => this == that,
            (this, that) => this.map_or(0, HashMap::len) == that.map_or(0, HashMap::len),
        }
    }
}

impl<K, V> Eq for BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> Hash for BiMap<K, V>
where
    K: Hash,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Summing per-entry hashes keeps the result independent of iteration order.
        let entries = self.iter().fold(0u64, |sum, (key, value)| {
            let mut hasher = DefaultHasher::new();
            key.hash(&mut hasher);
            value.hash(&mut hasher);
            sum.wrapping_add(hasher.finish())
        });
        state.write_usize(self.len());
        state.write_u64(entries);
    }
}

impl<K, V> fmt::Display for BiMap<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .format_with(", ", |(key, value), f| f(&format_args!("{key}: {value}")))
        )
    }
}

impl<K, V> fmt::Debug for BiMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a BiMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [BiMap], see [BiMap::iter].
pub struct Iter<'a, K, V> {
    inner: Option<hash_map::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
