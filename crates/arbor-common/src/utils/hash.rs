//! Fast hash map/set aliases.
//!
//! Hashbrown tables with the ahash hasher. These are not HashDoS-resistant;
//! keys in this library are small integers, never attacker-controlled.

/// A hash map keyed with ahash.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A hash set keyed with ahash.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
