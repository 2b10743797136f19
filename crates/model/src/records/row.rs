use crate::core::value::Value;
use std::collections::HashMap;

/// A row as the query layer sees it: string keys (columns, qualified columns
/// or prefixed aliases depending on the call site) to cell values.
pub type Row<V = Value> = HashMap<String, V>;

/// Builds a [`Row`] from a JSON object, e.g. a driver result serialized with
/// `row_to_json`. Non-object input yields an empty row.
pub fn row_from_json(json: serde_json::Value) -> Row {
    match json {
        serde_json::Value::Object(map) => map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        _ => Row::new(),
    }
}
