//! Tests for UPDATE statement recognition

mod common;

use common::{holder, recognize, recognize_with};
use sql_recognizer::{Error, Flavor, SqlType, Value, ValueMarker};

#[test]
fn update_with_literal_where() {
    let sql = "UPDATE t1 SET name = 'n', age = 5 WHERE id = 'id1'";
    let recognizer = recognize(sql);

    assert_eq!(recognizer.sql_type(), SqlType::Update);
    assert_eq!(recognizer.table_name().unwrap(), "t1");
    assert_eq!(recognizer.where_condition().unwrap(), "id = 'id1'");
    assert_eq!(recognizer.limit_condition().unwrap(), "");
}

#[test]
fn assignment_columns_and_markers() {
    let sql = "UPDATE t1 SET name = ?, age = 5, updated_at = NOW() WHERE id = ?";
    let recognizer = recognize(sql);
    let update = recognizer.as_update().unwrap();

    assert_eq!(
        update.update_columns().unwrap(),
        vec!["name", "age", "updated_at"]
    );
    assert_eq!(
        update.update_values(),
        vec![
            ValueMarker::Parameter("?".to_string()),
            ValueMarker::Literal(Value::I64(5)),
            ValueMarker::Computed,
        ]
    );
}

#[test]
fn where_ordinals_are_scoped_to_the_where_clause() {
    // The SET placeholder does not consume a WHERE ordinal.
    let sql = "UPDATE t1 SET name = ? WHERE id = ?";
    let recognizer = recognize(sql);

    let projection = recognizer
        .where_condition_with(&holder(&[(1, vec![Value::from("id1")])]))
        .unwrap();
    assert_eq!(projection.text, "id = ?");
    assert_eq!(projection.rows, vec![vec![Value::from("id1")]]);
}

#[test]
fn quoted_assignment_targets_are_simplified() {
    let sql = "UPDATE t1 SET `name` = 'n' WHERE id = 1";
    let recognizer = recognize_with(sql, Flavor::MySql);
    let update = recognizer.as_update().unwrap();

    assert_eq!(update.update_columns().unwrap(), vec!["`name`"]);
    assert_eq!(update.update_columns_simplified().unwrap(), vec!["name"]);
}

#[test]
fn tuple_assignment_target_is_malformed() {
    let sql = "UPDATE t1 SET (a, b) = (1, 2) WHERE id = 1";
    let recognizer = recognize_with(sql, Flavor::Postgres);
    let update = recognizer.as_update().unwrap();

    let err = update.update_columns().unwrap_err();
    assert!(matches!(err, Error::MalformedColumnExpression { .. }));
    assert!(matches!(
        update.update_columns_simplified().unwrap_err(),
        Error::MalformedColumnExpression { .. }
    ));

    // Other accessors on the same recognizer stay usable.
    assert_eq!(recognizer.table_name().unwrap(), "t1");
    assert_eq!(recognizer.where_condition().unwrap(), "id = 1");
}

#[test]
fn update_without_where_projects_vacuous_batch() {
    let recognizer = recognize("UPDATE t1 SET name = 'n'");

    assert_eq!(recognizer.where_condition().unwrap(), "");
    let projection = recognizer.where_condition_with(&holder(&[])).unwrap();
    assert_eq!(projection.text, "");
    assert_eq!(projection.rows, vec![Vec::<Value>::new()]);
}

#[test]
fn update_limit_renders() {
    let recognizer = recognize_with("UPDATE t1 SET age = 5 WHERE id > 1 LIMIT 3", Flavor::MySql);
    assert_eq!(recognizer.limit_condition().unwrap(), "LIMIT 3");
}
