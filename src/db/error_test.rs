//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Student".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Student with id '42'");
}

#[test]
fn student_not_found_uses_student_entity_type() {
    match DbError::student_not_found(7) {
        DbError::NotFound { entity_type, id } => {
            assert_eq!(entity_type, "Student");
            assert_eq!(id, "7");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn invalid_data_error_displays_correctly() {
    let err = DbError::InvalidData {
        message: "student has no id".to_string(),
        help: "Save the student before deleting it".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid data: student has no id (hint: Save the student before deleting it)"
    );
}

#[test]
fn constraint_error_displays_correctly() {
    let err = DbError::Constraint {
        message: "UNIQUE constraint failed: student.email".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Constraint violation: UNIQUE constraint failed: student.email"
    );
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 20250101000000".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 20250101000000"
    );
}

#[test]
fn pool_timeout_maps_to_connection_error() {
    let err = DbError::from(sqlx::Error::PoolTimedOut);
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn row_not_found_maps_to_database_error() {
    let err = DbError::from(sqlx::Error::RowNotFound);
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::student_not_found(1));
    assert!(result.is_err());
}
