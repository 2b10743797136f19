use crate::alias::Alias;
use std::{borrow::Borrow, collections::HashMap, hash::Hash, sync::Arc};
use tracing::trace;

mod rows;
mod select;
mod wrap;

pub use select::Selection;

pub const DEFAULT_ALIAS_DELIMITER: &str = ":";
pub const DEFAULT_COLUMN_DELIMITER: &str = ".";

/// Translates between an alias vocabulary and table-qualified names.
///
/// For table `t` with alias `c` bound to column `col`:
/// - prefixed alias: `t:c` (alias delimiter), used as a SELECT key
/// - prefixed column: `t.col` (column delimiter), passed to the query layer
///
/// All lookup tables are built once in the constructor; every operation
/// afterwards is a read. A translator is immutable and can be shared freely.
#[derive(Clone, Debug)]
pub struct AliasTranslator<A> {
    table: String,
    alias_delimiter: String,
    layer: Layer<A>,
    alias_to_column: HashMap<A, String>,
    alias_to_prefixed_alias: HashMap<A, String>,
    prefixed_alias_to_alias: HashMap<String, A>,
    alias_to_prefixed_column: HashMap<A, String>,
    prefixed_alias_to_prefixed_column: HashMap<String, String>,
}

/// Nesting context of a translator. Top-level translators use the default
/// column delimiter and are their own root; wrapped ones inherit both.
#[derive(Clone, Debug)]
struct Layer<A> {
    column_delimiter: String,
    root: Arc<HashMap<A, String>>,
    depth: usize,
}

impl<A: Alias> AliasTranslator<A> {
    /// Creates a translator with the default `:` alias delimiter.
    pub fn new<I, C>(table: impl Into<String>, mapping: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        C: Into<String>,
    {
        Self::with_delimiter(table, mapping, DEFAULT_ALIAS_DELIMITER)
    }

    pub fn with_delimiter<I, C>(
        table: impl Into<String>,
        mapping: I,
        alias_delimiter: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        C: Into<String>,
    {
        let alias_to_column: HashMap<A, String> = mapping
            .into_iter()
            .map(|(alias, column)| (alias, column.into()))
            .collect();

        let layer = Layer {
            column_delimiter: DEFAULT_COLUMN_DELIMITER.to_string(),
            root: Arc::new(alias_to_column.clone()),
            depth: 0,
        };

        Self::build(table.into(), alias_to_column, alias_delimiter.into(), layer)
    }

    /// Creates a translator where every alias is bound to the column of the
    /// same name.
    pub fn identity<I>(table: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::new(
            table,
            aliases.into_iter().map(|alias| {
                let column = alias.name().to_string();
                (alias, column)
            }),
        )
    }

    fn build(
        table: String,
        alias_to_column: HashMap<A, String>,
        alias_delimiter: String,
        layer: Layer<A>,
    ) -> Self {
        let size = alias_to_column.len();
        let mut alias_to_prefixed_alias = HashMap::with_capacity(size);
        let mut prefixed_alias_to_alias = HashMap::with_capacity(size);
        let mut alias_to_prefixed_column = HashMap::with_capacity(size);
        let mut prefixed_alias_to_prefixed_column = HashMap::with_capacity(size);

        for (alias, column) in &alias_to_column {
            let prefixed_alias = format!("{table}{alias_delimiter}{}", alias.name());
            let prefixed_column = format!("{table}{}{column}", layer.column_delimiter);

            alias_to_prefixed_alias.insert(alias.clone(), prefixed_alias.clone());
            prefixed_alias_to_alias.insert(prefixed_alias.clone(), alias.clone());
            alias_to_prefixed_column.insert(alias.clone(), prefixed_column.clone());
            prefixed_alias_to_prefixed_column.insert(prefixed_alias, prefixed_column);
        }

        trace!(
            "Built lookup tables for '{}' ({} aliases, alias delimiter '{}', column delimiter '{}', depth {})",
            table, size, alias_delimiter, layer.column_delimiter, layer.depth
        );

        Self {
            table,
            alias_delimiter,
            layer,
            alias_to_column,
            alias_to_prefixed_alias,
            prefixed_alias_to_alias,
            alias_to_prefixed_column,
            prefixed_alias_to_prefixed_column,
        }
    }

    /// Table or join scope name used as the prefix.
    pub fn name(&self) -> &str {
        &self.table
    }

    pub fn alias_delimiter(&self) -> &str {
        &self.alias_delimiter
    }

    pub fn column_delimiter(&self) -> &str {
        &self.layer.column_delimiter
    }

    /// Number of [`wrap`](Self::wrap) levels above the root translator.
    pub fn depth(&self) -> usize {
        self.layer.depth
    }

    pub fn len(&self) -> usize {
        self.alias_to_column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_to_column.is_empty()
    }

    pub fn contains<Q>(&self, alias: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.alias_to_column.contains_key(alias)
    }

    /// Aliases known to this translator, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &A> {
        self.alias_to_column.keys()
    }

    /// Column bound to `alias` at this layer. For wrapped translators this
    /// is the alias itself; see [`physical_column`](Self::physical_column).
    pub fn unqualified_column<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.alias_to_column.get(alias).map(String::as_str)
    }

    /// Physical column of `alias` in the root table, at any nesting depth.
    pub fn physical_column<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.layer.root.get(alias).map(String::as_str)
    }

    /// Qualified alias (`table:alias`) for building SELECT keys that
    /// [`to_alias`](Self::to_alias) can decode.
    pub fn prefixed_alias<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.alias_to_prefixed_alias.get(alias).map(String::as_str)
    }

    /// Qualified column (`table.column`) for a single alias.
    pub fn column<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.alias_to_prefixed_column.get(alias).map(String::as_str)
    }

    pub fn join_on<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.column(alias)
    }

    pub fn order_by<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.column(alias)
    }

    pub fn where_in<Q>(&self, alias: &Q) -> Option<&str>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.column(alias)
    }

    pub(crate) fn mapping(&self) -> &HashMap<A, String> {
        &self.alias_to_column
    }
}
