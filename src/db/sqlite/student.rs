//! SQLite StudentRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, Student, StudentRepository};

/// SQLx-backed student repository.
pub struct SqliteStudentRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_student(row: &SqliteRow) -> DbResult<Student> {
    Ok(Student {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        age: row.try_get("age")?,
        cellphone: row.try_get("cellphone")?,
    })
}

impl<'a> StudentRepository for SqliteStudentRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Student>> {
        let rows = sqlx::query("SELECT id, name, email, age, cellphone FROM student")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(row_to_student).collect()
    }

    async fn get(&self, id: i64) -> DbResult<Student> {
        let row = sqlx::query("SELECT id, name, email, age, cellphone FROM student WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::student_not_found(id))?;
        row_to_student(&row)
    }

    async fn save(&self, student: &Student) -> DbResult<Student> {
        // Dropping the transaction without commit rolls it back
        let mut tx = self.pool.begin().await?;

        let id = match student.id {
            None => {
                let result = sqlx::query(
                    "INSERT INTO student (name, email, age, cellphone) VALUES (?, ?, ?, ?)",
                )
                .bind(&student.name)
                .bind(&student.email)
                .bind(student.age)
                .bind(&student.cellphone)
                .execute(&mut *tx)
                .await?;

                result.last_insert_rowid()
            }
            Some(id) => {
                let result = sqlx::query(
                    "UPDATE student SET name = ?, email = ?, age = ?, cellphone = ? WHERE id = ?",
                )
                .bind(&student.name)
                .bind(&student.email)
                .bind(student.age)
                .bind(&student.cellphone)
                .bind(id)
                .execute(&mut *tx)
                .await?;

                if result.rows_affected() == 0 {
                    return Err(DbError::student_not_found(id));
                }
                id
            }
        };

        tx.commit().await?;

        Ok(Student {
            id: Some(id),
            ..student.clone()
        })
    }

    async fn delete(&self, student: &Student) -> DbResult<()> {
        let id = student.id.ok_or_else(|| DbError::InvalidData {
            message: "student has no id".to_string(),
            help: "Only stored students can be deleted".to_string(),
        })?;

        let result = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::student_not_found(id));
        }

        Ok(())
    }
}
