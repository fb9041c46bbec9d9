//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateStudentRequest, ErrorResponse, PatchStudentRequest, ReplaceStudentRequest,
    StudentResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Student records CRUD API",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::landing_page,
        handlers::health_ok,
        handlers::health_bad,
        handlers::list_students,
        handlers::get_student,
        handlers::add_student,
        handlers::modify_student,
        handlers::change_student,
        handlers::delete_student,
    ),
    components(
        schemas(
            StudentResponse,
            CreateStudentRequest,
            PatchStudentRequest,
            ReplaceStudentRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Greeting, landing page and health checks"),
        (name = "students", description = "Student management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/api/", get(handlers::landing_page))
        .route("/api/health-check/ok", get(handlers::health_ok))
        .route("/api/health-check/bad", get(handlers::health_bad));

    // Student routes (generic over Database)
    let student_routes = routes!(D => {
        get "/api/students" => handlers::list_students,
        get "/api/students/get/{id}" => handlers::get_student,
        post "/api/students/add" => handlers::add_student,
        patch "/api/students/modify/{id}" => handlers::modify_student,
        put "/api/students/change/{id}" => handlers::change_student,
        delete "/api/students/delete/{id}" => handlers::delete_student,
    });

    system_routes
        .merge(student_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
