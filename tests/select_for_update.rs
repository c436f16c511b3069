//! Tests for SELECT ... FOR UPDATE statement recognition

mod common;

use common::{holder, recognize, try_recognize};
use sql_recognizer::{SqlType, Value};

#[test]
fn plain_select_is_not_recognized() {
    assert!(try_recognize("SELECT name FROM t1 WHERE id = 1").is_none());
}

#[test]
fn non_dml_statements_are_not_recognized() {
    assert!(try_recognize("CREATE TABLE t1 (id INT)").is_none());
}

#[test]
fn select_for_update_is_recognized() {
    let sql = "SELECT name FROM t1 WHERE id = 'id1' FOR UPDATE";
    let recognizer = recognize(sql);

    assert_eq!(recognizer.sql_type(), SqlType::SelectForUpdate);
    assert_eq!(recognizer.original_sql(), sql);
    assert_eq!(recognizer.table_name().unwrap(), "t1");
    assert_eq!(recognizer.where_condition().unwrap(), "id = 'id1'");
    assert_eq!(recognizer.limit_condition().unwrap(), "");
}

#[test]
fn placeholder_projection() {
    let sql = "SELECT name FROM t1 WHERE id = ? FOR UPDATE";
    let recognizer = recognize(sql);

    let projection = recognizer
        .where_condition_with(&holder(&[(1, vec![Value::from("id1")])]))
        .unwrap();
    assert_eq!(projection.text, "id = ?");
    assert_eq!(projection.rows, vec![vec![Value::from("id1")]]);
}

#[test]
fn aliased_table_source() {
    let sql = "SELECT a.name FROM t1 AS a WHERE a.id = 1 FOR UPDATE";
    let recognizer = recognize(sql);

    assert_eq!(recognizer.table_name().unwrap(), "t1");
    assert_eq!(recognizer.table_alias().unwrap(), Some("a".to_string()));
}

#[test]
fn limit_clause_renders() {
    let sql = "SELECT name FROM t1 WHERE id > 1 LIMIT 10 FOR UPDATE";
    let recognizer = recognize(sql);

    assert_eq!(recognizer.limit_condition().unwrap(), "LIMIT 10");
}
