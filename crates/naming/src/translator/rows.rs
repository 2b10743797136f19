use super::AliasTranslator;
use crate::{
    alias::{Alias, AliasedRow},
    index,
};
use model::records::row::Row;
use std::{borrow::Borrow, collections::HashMap, hash::Hash};
use tracing::debug;

impl<A: Alias> AliasTranslator<A> {
    /// Alias-keyed write payload to a column-keyed one for INSERT.
    pub fn insert<I, K, V>(&self, row: I) -> Row<V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<A>,
    {
        self.to_columns(row)
    }

    /// Alias-keyed write payload to a column-keyed one for UPDATE.
    pub fn update<I, K, V>(&self, row: I) -> Row<V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<A>,
    {
        self.to_columns(row)
    }

    /// Alias-keyed predicate to one keyed by qualified column.
    ///
    /// Unlike [`insert`](Self::insert), keys come out table-qualified so they
    /// stay unambiguous inside joins.
    pub fn where_clause<I, K, V>(&self, predicate: I) -> Row<V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<A>,
    {
        self.translate_keys(predicate, &self.alias_to_prefixed_column)
    }

    /// Decodes a result row keyed by prefixed alias into an alias-keyed row.
    /// Keys that are not prefixed aliases of this translator are dropped.
    pub fn to_alias<I, K, V>(&self, row: I) -> AliasedRow<A, V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut aliased = HashMap::new();
        for (key, value) in row {
            match self.prefixed_alias_to_alias.get(key.as_ref()) {
                Some(alias) => {
                    aliased.insert(alias.clone(), value);
                }
                None => debug!(
                    "Dropping unknown prefixed alias '{}' for '{}'",
                    key.as_ref(),
                    self.table
                ),
            }
        }
        aliased
    }

    /// Fold step indexing alias-keyed rows by the value of `alias`.
    pub fn to_hashmap<V>(
        &self,
        alias: A,
    ) -> impl FnMut(HashMap<V, AliasedRow<A, V>>, AliasedRow<A, V>) -> HashMap<V, AliasedRow<A, V>>
    + use<A, V>
    where
        V: Clone + Eq + Hash,
    {
        index::to_hashmap(alias)
    }

    /// Fold step indexing items by a caller-supplied key.
    pub fn to_hashmap_with<R, K, F>(
        &self,
        key: F,
    ) -> impl FnMut(HashMap<K, R>, R) -> HashMap<K, R> + use<A, R, K, F>
    where
        F: Fn(&R) -> K,
        K: Eq + Hash,
    {
        index::to_hashmap_with(key)
    }

    fn to_columns<I, K, V>(&self, row: I) -> Row<V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<A>,
    {
        self.translate_keys(row, &self.alias_to_column)
    }

    fn translate_keys<I, K, V>(&self, row: I, lookup: &HashMap<A, String>) -> Row<V>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<A>,
    {
        let mut translated = Row::new();
        for (alias, value) in row {
            let alias: &A = alias.borrow();
            match lookup.get(alias) {
                Some(key) => {
                    translated.insert(key.clone(), value);
                }
                None => debug!(
                    "Dropping unknown alias '{}' for '{}'",
                    alias.name(),
                    self.table
                ),
            }
        }
        translated
    }
}
