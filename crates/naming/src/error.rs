use thiserror::Error;

/// Errors raised while describing or loading translator configuration.
///
/// Translation itself never fails: unknown aliases and keys are omitted.
#[derive(Debug, Error)]
pub enum NamingError {
    #[error("Table name must not be empty")]
    EmptyTableName,

    #[error("Alias delimiter must not be empty")]
    EmptyDelimiter,

    /// Prefixed aliases would be indistinguishable from prefixed columns.
    #[error("Alias delimiter '{0}' collides with the column delimiter")]
    AmbiguousDelimiter(String),

    #[error("Alias names must not be empty")]
    EmptyAlias,

    #[error("Column for alias '{alias}' must not be empty")]
    EmptyColumn { alias: String },

    #[error("Alias '{0}' is reserved")]
    ReservedAlias(String),

    #[error("Unknown alias: {0}")]
    UnknownAlias(String),

    #[error("Invalid table config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NamingError>;
