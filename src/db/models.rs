//! Domain models for the roster database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A student record.
///
/// `id` is `None` until the record has been saved for the first time;
/// the storage backend assigns it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i64,
    /// Phone number, at most 13 characters.
    pub cellphone: String,
}

impl Student {
    /// Create an unsaved student (no id assigned yet).
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        cellphone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
            cellphone: cellphone.into(),
        }
    }

    /// Whether the storage backend has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
