//! Fold steps for indexing decoded rows.
//!
//! ```
//! use naming::{AliasedRow, Value, index};
//! use std::collections::HashMap;
//!
//! let rows: Vec<AliasedRow<String>> = vec![
//!     HashMap::from([("id".to_string(), Value::from("a"))]),
//!     HashMap::from([("id".to_string(), Value::from("b"))]),
//! ];
//! let by_id = rows
//!     .into_iter()
//!     .fold(HashMap::new(), index::to_hashmap("id".to_string()));
//! assert_eq!(by_id.len(), 2);
//! ```

use crate::alias::{Alias, AliasedRow};
use std::{collections::HashMap, hash::Hash};
use tracing::debug;

/// Indexes alias-keyed rows by the value stored under `alias`.
///
/// Later rows replace earlier ones with the same key. Rows without the
/// field are skipped.
pub fn to_hashmap<A, V>(
    alias: A,
) -> impl FnMut(HashMap<V, AliasedRow<A, V>>, AliasedRow<A, V>) -> HashMap<V, AliasedRow<A, V>>
where
    A: Alias,
    V: Clone + Eq + Hash,
{
    move |mut acc, row| {
        match row.get(&alias).cloned() {
            Some(key) => {
                acc.insert(key, row);
            }
            None => debug!("Skipping row without index field '{}'", alias.name()),
        }
        acc
    }
}

/// Indexes items by `key(item)`. Later items replace earlier ones.
pub fn to_hashmap_with<R, K, F>(key: F) -> impl FnMut(HashMap<K, R>, R) -> HashMap<K, R>
where
    F: Fn(&R) -> K,
    K: Eq + Hash,
{
    move |mut acc, item| {
        acc.insert(key(&item), item);
        acc
    }
}
