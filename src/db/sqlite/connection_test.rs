//! Tests for SQLite database connection and migrations.

use crate::db::{Database, DbError, SqliteDatabase, Student, StudentRepository};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_student_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    for table in ["_sqlx_migrations", "student"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM student")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");

    assert_eq!(count, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn student_table_rejects_null_cellphone() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let result = sqlx::query(
        "INSERT INTO student (name, email, age, cellphone) VALUES ('Ada', 'ada@example.com', 36, NULL)",
    )
    .execute(db.pool())
    .await;

    let err = DbError::from(result.expect_err("NULL cellphone must be rejected"));
    assert!(matches!(err, DbError::Constraint { .. }), "got {:?}", err);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");
    assert!(!path.exists());

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Opening a new file should succeed");
    db.migrate().await.unwrap();

    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let id = {
        let db = SqliteDatabase::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        let saved = db
            .students()
            .save(&Student::new("Ada", "ada@example.com", 36, "5551234567"))
            .await
            .unwrap();
        db.pool().close().await;
        saved.id.unwrap()
    };

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();
    let student = db.students().get(id).await.unwrap();
    assert_eq!(student.email, "ada@example.com");
}
