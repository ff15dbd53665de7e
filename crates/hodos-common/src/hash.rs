//! Fast hash map and set aliases.
//!
//! Hodos keys maps by small integer tuples, where ahash comfortably beats
//! SipHash and DoS resistance buys nothing.

/// Hash map keyed with ahash.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set keyed with ahash.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
