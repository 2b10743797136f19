use crate::{AliasTranslator, alias_set};

mod wrap;

alias_set! {
    pub enum Field {
        Col => "col",
        MyColumn => "myColumn",
    }
}

alias_set! {
    pub enum Short {
        C => "c",
        M => "m",
    }
}

/// `my_table` with `col -> col` and `myColumn -> my_column`.
fn my_table() -> AliasTranslator<Field> {
    AliasTranslator::new(
        "my_table",
        [(Field::Col, "col"), (Field::MyColumn, "my_column")],
    )
}

/// Table `t` with `c -> c` and `m -> my_col`.
fn t() -> AliasTranslator<Short> {
    AliasTranslator::new("t", [(Short::C, "c"), (Short::M, "my_col")])
}

/// Same shape as [`t`] but keyed by runtime strings.
fn t_dynamic() -> AliasTranslator<String> {
    AliasTranslator::new(
        "t",
        [
            ("c".to_string(), "c".to_string()),
            ("m".to_string(), "my_col".to_string()),
        ],
    )
}

fn strings(pairs: &[(&str, &str)]) -> std::collections::HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
