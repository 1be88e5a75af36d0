#![cfg(feature = "sqlite")]

use sql_dal::prelude::*;

fn open_db(dir: &tempfile::TempDir) -> Database {
    let path = dir.path().join("test.db3");
    Database::new_sqlite(SqliteOptions::new(path.to_string_lossy().to_string())).unwrap()
}

#[test]
fn invalid_query_raises_normalized_execution_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut db = open_db(&dir);

    let err = db
        .execute("SELECT * FROM foobar WHERE email=?", &[])
        .unwrap_err();

    match &err {
        DbError::ExecutionError { message, .. } => {
            assert!(message.contains("no such table"), "message: {message}");
            // "<code>: <message>" shape
            let (code, rest) = message.split_once(": ").unwrap();
            assert!(code.parse::<i64>().is_ok(), "code: {code}");
            assert!(rest.contains("foobar"));
        }
        other => panic!("expected ExecutionError, got {other:?}"),
    }
    Ok(())
}

#[test]
fn failures_append_to_the_error_record() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut db = open_db(&dir);

    assert!(db.errors().is_empty());

    let _ = db.execute("SELECT * FROM missing_table", &[]);
    assert_eq!(db.errors().len(), 1);
    assert!(db.errors()[0].contains("no such table"));

    // The same failure twice yields two identically formatted entries,
    // never deduplicated
    let _ = db.execute("SELECT * FROM missing_table", &[]);
    assert_eq!(db.errors().len(), 2);
    assert_eq!(db.errors()[0], db.errors()[1]);
    Ok(())
}

#[test]
fn successful_statements_leave_the_record_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut db = open_db(&dir);

    let _ = db.execute("SELECT * FROM nowhere", &[]);
    assert_eq!(db.errors().len(), 1);

    db.execute("CREATE TABLE t (id INTEGER)", &[])?;
    db.execute("SELECT * FROM t", &[])?;
    // Errors persist for the life of the handle
    assert_eq!(db.errors().len(), 1);
    Ok(())
}

#[test]
fn create_table_twice_surfaces_driver_message() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut db = open_db(&dir);

    db.execute("CREATE TABLE users (id INTEGER)", &[])?;
    let err = db.execute("CREATE TABLE users (id INTEGER)", &[]).unwrap_err();
    assert!(err.to_string().contains("already"), "got: {err}");
    Ok(())
}

#[test]
fn construction_failure_yields_no_handle() {
    let result = Database::new_sqlite(SqliteOptions::new("/nonexistent-dir/test.db3"));
    match result {
        Err(DbError::ConnectionError(_)) => {}
        Err(other) => panic!("expected ConnectionError, got {other:?}"),
        Ok(_) => panic!("expected ConnectionError, got a handle"),
    }
}

#[test]
fn prepare_failure_and_execute_failure_share_the_error_path(
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut db = open_db(&dir);
    db.execute("CREATE TABLE t (id INTEGER PRIMARY KEY)", &[])?;

    // Prepare-time failure: syntactically broken statement
    let _ = db.execute("SELEKT * FROM t", &[]);
    // Execute-time failure: constraint violation
    db.execute("INSERT INTO t (id) VALUES (1)", &[])?;
    let _ = db.execute("INSERT INTO t (id) VALUES (1)", &[]);

    assert_eq!(db.errors().len(), 2);
    assert!(db.errors()[0].contains("syntax error"));
    assert!(db.errors()[1].to_lowercase().contains("unique"));
    Ok(())
}
