//! Immutable bidirectional maps.
//!
//! A [BiMap] pairs every key with exactly one value and every value with exactly one key. Both
//! directions are built once at construction time and answer lookups in constant time. The
//! [reversed](BiMap::reversed) view swaps the roles of keys and values without copying anything.
//!
//! ```
//! use lexica_rs::BiMap;
//!
//! let index = BiMap::from_keys(|k: &&str| k.to_lowercase(), ["A", "B", "C"]);
//! assert_eq!(index.value_for("A").map(String::as_str), Some("a"));
//! assert_eq!(index.key_for("b"), Some(&"B"));
//! assert!(index.reversed().reversed().ptr_eq(&index));
//! ```
mod bimap;
mod variants;

pub use bimap::{BiMap, BiMapBuilder, Collision, Iter};
pub use variants::NamedVariants;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The key of the pair at position {position} is already mapped")]
    DuplicateKey { position: usize },
    #[error("The value of the pair at position {position} is already mapped")]
    DuplicateValue { position: usize },
}
