use std::collections::HashMap;
use std::hash::Hash;

use crate::Error;

use super::BiMap;

/// What a [BiMapBuilder] does with a pair whose key or value is already mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collision {
    /// The later pair replaces every earlier pair sharing its key or its value.
    #[default]
    Overwrite,
    /// The pair is dropped and [BiMapBuilder::build] reports the first such pair.
    Reject,
}

/// Accumulates pairs for a [BiMap]
///
/// Both tables are kept exact inverses of each other after every [insert](BiMapBuilder::insert):
/// under [Collision::Overwrite] the earlier pair sharing the key and the earlier pair sharing the
/// value are both evicted before the new pair goes in.
///
/// ```
/// use lexica_rs::{BiMapBuilder, Collision, Error};
///
/// let mut builder = BiMapBuilder::new().on_collision(Collision::Reject);
/// builder.insert("one", 1).insert("uno", 1);
/// assert_eq!(builder.build(), Err(Error::DuplicateValue { position: 1 }));
/// ```
#[derive(Debug)]
pub struct BiMapBuilder<K, V> {
    forward: HashMap<K, V>,
    backward: HashMap<V, K>,
    collision: Collision,
    position: usize,
    overwritten: usize,
    rejected: Option<Error>,
}

impl<K, V> Default for BiMapBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BiMapBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            backward: HashMap::with_capacity(capacity),
            collision: Collision::default(),
            position: 0,
            overwritten: 0,
            rejected: None,
        }
    }

    pub fn on_collision(mut self, collision: Collision) -> Self {
        self.collision = collision;
        self
    }

    /// Adds a pair, resolving collisions according to the configured [Collision] policy.
    pub fn insert(&mut self, key: K, value: V) -> &mut Self {
        let position = self.position;
        self.position += 1;

        if self.collision == Collision::Reject {
            if self.rejected.is_some() {
                return self;
            }
            if self.forward.contains_key(&key) {
                self.rejected = Some(Error::DuplicateKey { position });
                return self;
            }
            if self.backward.contains_key(&value) {
                self.rejected = Some(Error::DuplicateValue { position });
                return self;
            }
        }

        if let Some(previous_value) = self.forward.remove(&key) {
            self.backward.remove(&previous_value);
            if previous_value != value {
                self.overwritten += 1;
            }
        }
        if let Some(previous_key) = self.backward.remove(&value) {
            self.forward.remove(&previous_key);
            self.overwritten += 1;
        }

        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        self
    }

    /// Freezes the accumulated pairs into a [BiMap].
    ///
    /// Fails with the first collision if the builder was configured with [Collision::Reject].
    pub fn build(self) -> Result<BiMap<K, V>, Error> {
        if let Some(err) = self.rejected {
            tracing::debug!(%err, "rejected bidirectional map construction");
            return Err(err);
        }
        Ok(self.finish())
    }

    pub(super) fn finish(mut self) -> BiMap<K, V> {
        if self.overwritten > 0 {
            tracing::debug!(
                overwritten = self.overwritten,
                pairs = self.position,
                "later pairs replaced earlier pairs sharing a key or value"
            );
        }
        tracing::trace!(entries = self.forward.len(), "built bidirectional map");

        self.forward.shrink_to_fit();
        self.backward.shrink_to_fit();
        BiMap::from_tables(self.forward, self.backward)
    }
}
