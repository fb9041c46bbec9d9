//! Student management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, DbError, Student, StudentRepository};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Student response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    /// Server-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Full name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address (unique)
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Age in years
    #[schema(example = 36)]
    pub age: i64,
    /// Phone number (unique, at most 13 characters)
    #[schema(example = "+525512345678")]
    pub cellphone: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            name: s.name,
            email: s.email,
            age: s.age,
            cellphone: s.cellphone,
        }
    }
}

/// Create student request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = 36)]
    pub age: i64,
    #[schema(example = "+525512345678")]
    pub cellphone: String,
}

impl From<CreateStudentRequest> for Student {
    fn from(req: CreateStudentRequest) -> Self {
        Student::new(req.name, req.email, req.age, req.cellphone)
    }
}

/// Partial update DTO. Absent and `null` fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchStudentRequest {
    #[schema(example = "Ada King")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[schema(example = 37)]
    pub age: Option<i64>,
    pub cellphone: Option<String>,
}

impl PatchStudentRequest {
    fn merge_into(self, target: &mut Student) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(email) = self.email {
            target.email = email;
        }
        if let Some(age) = self.age {
            target.age = age;
        }
        if let Some(cellphone) = self.cellphone {
            target.cellphone = cellphone;
        }
    }
}

/// Full replacement DTO. Every field is required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceStudentRequest {
    #[schema(example = "Ada King")]
    pub name: String,
    #[schema(example = "ada.king@example.com")]
    pub email: String,
    #[schema(example = 37)]
    pub age: i64,
    #[schema(example = "+525587654321")]
    pub cellphone: String,
}

impl ReplaceStudentRequest {
    fn apply_to(self, target: &mut Student) {
        target.name = self.name;
        target.email = self.email;
        target.age = self.age;
        target.cellphone = self.cellphone;
    }
}

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Student '1' not found")]
    pub error: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

/// Map a storage error to its HTTP status and JSON body.
fn error_response(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, error) = match e {
        DbError::NotFound { ref id, .. } => {
            (StatusCode::NOT_FOUND, format!("Student '{}' not found", id))
        }
        DbError::Constraint { .. } => {
            warn!(error = %e, "Student write rejected");
            (StatusCode::CONFLICT, e.to_string())
        }
        DbError::InvalidData { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    (status, Json(ErrorResponse { error }))
}

// =============================================================================
// Handlers
// =============================================================================

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses(
        (status = 200, description = "All stored students", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_students<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = state
        .db()
        .students()
        .list()
        .await
        .map_err(error_response)?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/api/students/get/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StudentResponse>> {
    let student = state
        .db()
        .students()
        .get(id)
        .await
        .map_err(error_response)?;

    Ok(Json(StudentResponse::from(student)))
}

/// Create a new student
///
/// The server assigns the id. `email` and `cellphone` must be unique.
#[utoipa::path(
    post,
    path = "/api/students/add",
    tag = "students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 409, description = "Email or cellphone already in use", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped field"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_student<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    let student = state
        .db()
        .students()
        .save(&Student::from(req))
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// Partially update a student
///
/// Only fields present and non-null in the body are changed.
#[utoipa::path(
    patch,
    path = "/api/students/modify/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = PatchStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Email or cellphone already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn modify_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<PatchStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let mut student = state
        .db()
        .students()
        .get(id)
        .await
        .map_err(error_response)?;

    req.merge_into(&mut student);

    let student = state
        .db()
        .students()
        .save(&student)
        .await
        .map_err(error_response)?;

    Ok(Json(StudentResponse::from(student)))
}

/// Replace a student
///
/// Every field is overwritten. A body missing any field is rejected and the
/// stored record is left unchanged.
#[utoipa::path(
    put,
    path = "/api/students/change/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = ReplaceStudentRequest,
    responses(
        (status = 200, description = "Student replaced", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Email or cellphone already in use", body = ErrorResponse),
        (status = 422, description = "Missing or mistyped field"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn change_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<ReplaceStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let mut student = state
        .db()
        .students()
        .get(id)
        .await
        .map_err(error_response)?;

    req.apply_to(&mut student);

    let student = state
        .db()
        .students()
        .save(&student)
        .await
        .map_err(error_response)?;

    Ok(Json(StudentResponse::from(student)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/delete/{id}",
    tag = "students",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let student = state
        .db()
        .students()
        .get(id)
        .await
        .map_err(error_response)?;

    state
        .db()
        .students()
        .delete(&student)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
