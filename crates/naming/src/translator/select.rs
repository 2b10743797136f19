use super::AliasTranslator;
use crate::alias::{Alias, WILDCARD};
use std::collections::HashMap;

/// One item of a selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<A> {
    /// Every alias of the table (`*`).
    All,
    Alias(A),
}

impl<A: Alias> Selection<A> {
    pub fn is_wildcard(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Alias(alias) => alias.name() == WILDCARD,
        }
    }
}

impl<A> From<A> for Selection<A> {
    fn from(alias: A) -> Self {
        Selection::Alias(alias)
    }
}

impl From<&str> for Selection<String> {
    fn from(alias: &str) -> Self {
        if alias == WILDCARD {
            Selection::All
        } else {
            Selection::Alias(alias.to_string())
        }
    }
}

impl<A: Alias> AliasTranslator<A> {
    /// Prefixed alias to prefixed column for every alias.
    pub fn select_all(&self) -> &HashMap<String, String> {
        &self.prefixed_alias_to_prefixed_column
    }

    /// Prefixed alias to prefixed column for the requested aliases.
    ///
    /// A leading wildcard selects everything regardless of what follows.
    /// Unknown aliases, and wildcards in any other position, are skipped.
    pub fn select<I, S>(&self, aliases: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<Selection<A>>,
    {
        let mut aliases = aliases
            .into_iter()
            .map(Into::<Selection<A>>::into)
            .peekable();
        if aliases.peek().is_some_and(Selection::is_wildcard) {
            return self.select_all().clone();
        }

        let mut selection = HashMap::new();
        for item in aliases {
            let Selection::Alias(alias) = item else {
                continue;
            };

            if let (Some(prefixed_alias), Some(prefixed_column)) = (
                self.alias_to_prefixed_alias.get(&alias),
                self.alias_to_prefixed_column.get(&alias),
            ) {
                selection.insert(prefixed_alias.clone(), prefixed_column.clone());
            }
        }

        selection
    }
}
