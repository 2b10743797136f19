use super::{AliasTranslator, DEFAULT_ALIAS_DELIMITER, Layer};
use crate::alias::Alias;
use std::{collections::HashMap, sync::Arc};

impl<A: Alias> AliasTranslator<A> {
    /// Wraps this translator in one more nesting level using `:`.
    ///
    /// See [`wrap_with`](Self::wrap_with).
    pub fn wrap(&self) -> Self {
        self.wrap_with(DEFAULT_ALIAS_DELIMITER)
    }

    /// Builds a translator whose input vocabulary is this translator's
    /// output: the "columns" of the new layer are this layer's prefixed
    /// aliases, so a joined row keyed by `t:c` can be re-keyed as `t::c`.
    ///
    /// The new alias delimiter is `delimiter` followed by the current one,
    /// so qualified names never collide across levels. The root mapping is
    /// carried along for [`physical_column`](Self::physical_column).
    pub fn wrap_with(&self, delimiter: &str) -> Self {
        let alias_to_alias: HashMap<A, String> = self
            .alias_to_column
            .keys()
            .map(|alias| (alias.clone(), alias.name().to_string()))
            .collect();

        let layer = Layer {
            column_delimiter: self.alias_delimiter.clone(),
            root: Arc::clone(&self.layer.root),
            depth: self.layer.depth + 1,
        };

        Self::build(
            self.table.clone(),
            alias_to_alias,
            format!("{delimiter}{}", self.alias_delimiter),
            layer,
        )
    }
}
