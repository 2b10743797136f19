use crate::{
    alias::{Alias, WILDCARD},
    error::{NamingError, Result},
    translator::{AliasTranslator, DEFAULT_ALIAS_DELIMITER, DEFAULT_COLUMN_DELIMITER},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable description of a table's alias vocabulary.
///
/// ```json
/// { "table": "users", "columns": { "id": "user_id", "name": "full_name" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub table: String,

    #[serde(default = "default_alias_delimiter")]
    pub alias_delimiter: String,

    /// Alias to physical column.
    #[serde(default)]
    pub columns: HashMap<String, String>,
}

fn default_alias_delimiter() -> String {
    DEFAULT_ALIAS_DELIMITER.to_string()
}

impl TableConfig {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias_delimiter: default_alias_delimiter(),
            columns: HashMap::new(),
        }
    }

    pub fn with_alias_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.alias_delimiter = delimiter.into();
        self
    }

    pub fn with_column(mut self, alias: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.insert(alias.into(), column.into());
        self
    }

    /// Parses and validates a single table config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a list of table configs.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let configs: Vec<Self> = serde_json::from_str(json)?;
        for config in &configs {
            config.validate()?;
        }
        Ok(configs)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Captures the mapping of a translator's current layer.
    ///
    /// Only top-level translators round-trip exactly; a wrapped translator
    /// is captured as a flat table over its prefixed-alias columns.
    pub fn from_translator<A: Alias>(translator: &AliasTranslator<A>) -> Self {
        Self {
            table: translator.name().to_string(),
            alias_delimiter: translator.alias_delimiter().to_string(),
            columns: translator
                .mapping()
                .iter()
                .map(|(alias, column)| (alias.name().to_string(), column.clone()))
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.is_empty() {
            return Err(NamingError::EmptyTableName);
        }
        if self.alias_delimiter.is_empty() {
            return Err(NamingError::EmptyDelimiter);
        }
        if self.alias_delimiter == DEFAULT_COLUMN_DELIMITER {
            return Err(NamingError::AmbiguousDelimiter(
                self.alias_delimiter.clone(),
            ));
        }

        for (alias, column) in &self.columns {
            if alias.is_empty() {
                return Err(NamingError::EmptyAlias);
            }
            if alias == WILDCARD {
                return Err(NamingError::ReservedAlias(alias.clone()));
            }
            if column.is_empty() {
                return Err(NamingError::EmptyColumn {
                    alias: alias.clone(),
                });
            }
        }

        Ok(())
    }
}

impl TryFrom<TableConfig> for AliasTranslator<String> {
    type Error = NamingError;

    fn try_from(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(AliasTranslator::with_delimiter(
            config.table,
            config.columns,
            config.alias_delimiter,
        ))
    }
}

impl TryFrom<&TableConfig> for AliasTranslator<String> {
    type Error = NamingError;

    fn try_from(config: &TableConfig) -> Result<Self> {
        Self::try_from(config.clone())
    }
}
