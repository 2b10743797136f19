use super::{Field, Short, my_table, strings, t, t_dynamic};
use crate::{Selection, Value};
use std::collections::HashMap;

#[test]
fn test_wrap_select_wildcard() {
    assert_eq!(
        my_table().wrap().select([Selection::All]),
        strings(&[
            ("my_table::col", "my_table:col"),
            ("my_table::myColumn", "my_table:myColumn"),
        ])
    );
}

#[test]
fn test_wrap_select_specified_columns() {
    let wrapped = my_table().wrap();

    assert_eq!(
        wrapped.select([Field::MyColumn]),
        strings(&[("my_table::myColumn", "my_table:myColumn")])
    );
    assert_eq!(
        wrapped.select([Field::Col, Field::MyColumn]),
        strings(&[
            ("my_table::col", "my_table:col"),
            ("my_table::myColumn", "my_table:myColumn"),
        ])
    );
}

#[test]
fn test_wrap_scenario() {
    assert_eq!(
        *t().wrap().select_all(),
        strings(&[("t::c", "t:c"), ("t::m", "t:m")])
    );
}

#[test]
fn test_wrap_where() {
    let predicate = my_table().wrap().where_clause([
        (Field::MyColumn, "foo"),
        (Field::Col, "bar"),
    ]);

    assert_eq!(
        predicate,
        HashMap::from([
            ("my_table:myColumn".to_string(), "foo"),
            ("my_table:col".to_string(), "bar"),
        ])
    );
}

#[test]
fn test_wrap_to_alias() {
    let decoded = my_table().wrap().to_alias([
        ("my_table::col", Value::from("foo")),
        ("my_table::myColumn", Value::from("bar")),
    ]);

    assert_eq!(
        decoded,
        HashMap::from([
            (Field::Col, Value::from("foo")),
            (Field::MyColumn, Value::from("bar")),
        ])
    );
}

#[test]
fn test_wrap_to_alias_ignores_inner_keys() {
    let decoded = t().wrap().to_alias([("t:c", "inner"), ("t::m", "outer")]);
    assert_eq!(decoded, HashMap::from([(Short::M, "outer")]));
}

#[test]
fn test_wrap_delimiters() {
    let inner = t();
    let outer = inner.wrap();

    assert_eq!(outer.alias_delimiter(), "::");
    assert_eq!(outer.column_delimiter(), ":");
    assert_eq!(outer.depth(), 1);
    assert_eq!(outer.name(), "t");
    assert_eq!(outer.len(), inner.len());
}

#[test]
fn test_wrap_twice_compounds_delimiters() {
    let twice = t_dynamic().wrap().wrap();

    assert_eq!(twice.alias_delimiter(), ":::");
    assert_eq!(twice.column_delimiter(), "::");
    assert_eq!(twice.depth(), 2);
    assert_eq!(twice.select(["c"]), strings(&[("t:::c", "t::c")]));
}

#[test]
fn test_wrap_with_custom_delimiter() {
    let wrapped = t().wrap_with("|");

    assert_eq!(wrapped.alias_delimiter(), "|:");
    assert_eq!(wrapped.prefixed_alias(&Short::C), Some("t|:c"));
    assert_eq!(wrapped.column(&Short::C), Some("t:c"));
}

#[test]
fn test_wrap_keeps_physical_columns() {
    let deep = t().wrap().wrap().wrap();

    assert_eq!(deep.physical_column(&Short::M), Some("my_col"));
    assert_eq!(deep.unqualified_column(&Short::M), Some("m"));
    assert_eq!(deep.column(&Short::M), Some("t:::m"));
}

#[test]
fn test_wrap_leaves_inner_untouched() {
    let inner = t();
    let before = inner.select_all().clone();
    let _outer = inner.wrap();

    assert_eq!(*inner.select_all(), before);
    assert_eq!(inner.depth(), 0);
}

#[test]
fn test_levels_never_collide() {
    let inner = t();
    let outer = inner.wrap();
    let outermost = outer.wrap();

    for key in outer.select_all().keys() {
        assert!(!inner.select_all().contains_key(key));
        assert!(!outermost.select_all().contains_key(key));
    }
}

#[test]
fn test_join_result_re_keyed_by_outer_layer() {
    // an inner query selected `t:c`/`t:m`; the outer query re-selects them
    let inner = t();
    let outer = inner.wrap();
    let projection = outer.select_all();

    let raw: HashMap<String, Value> = projection
        .keys()
        .map(|key| (key.clone(), Value::from(key.as_str())))
        .collect();

    let decoded = outer.to_alias(raw);
    assert_eq!(decoded.get(&Short::C), Some(&Value::from("t::c")));
    assert_eq!(decoded.get(&Short::M), Some(&Value::from("t::m")));
}
