//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{DbResult, models::Student};

/// Repository for Student operations.
pub trait StudentRepository {
    /// Get all students, in the storage backend's default order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Student>>> + Send;

    /// Get a student by ID.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Student>> + Send;

    /// Insert the student if it has no id, otherwise update the row with that id.
    ///
    /// Returns the stored record, including the assigned id on insert.
    fn save(&self, student: &Student) -> impl Future<Output = DbResult<Student>> + Send;

    /// Delete a previously loaded student.
    fn delete(&self, student: &Student) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Students<'a>: StudentRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the student repository.
    fn students(&self) -> Self::Students<'_>;
}
