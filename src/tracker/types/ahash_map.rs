use std::collections::HashMap;

/// Keys come straight from client queries, so the hasher is randomly seeded.
pub type AHashMap<K, V> = HashMap<K, V, ahash::RandomState>;
