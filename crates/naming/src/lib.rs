//! Alias/column name translation for query layers.
//!
//! Application code names fields by short aliases; an [`AliasTranslator`]
//! turns them into table-qualified, join-safe identifiers and decodes result
//! rows back into alias-keyed records.

pub mod alias;
pub mod config;
pub mod error;
pub mod index;
pub mod translator;

pub use alias::{Alias, AliasedRow, WILDCARD};
pub use config::TableConfig;
pub use error::{NamingError, Result};
pub use model::{core::value::Value, records::row::Row};
pub use translator::{
    AliasTranslator, DEFAULT_ALIAS_DELIMITER, DEFAULT_COLUMN_DELIMITER, Selection,
};

#[cfg(test)]
mod tests;
