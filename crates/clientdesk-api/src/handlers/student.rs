//! Student registry endpoints.

use axum::extract::State;
use axum::Json;

use clientdesk_entity::student::{NewStudent, Student};

use crate::state::AppState;

/// `GET /students` — list all students, ordered by id.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.students.all())
}

/// `POST /students` — add a student to the registry.
pub async fn create(
    State(state): State<AppState>,
    Json(new_student): Json<NewStudent>,
) -> Json<Student> {
    Json(state.students.add(new_student))
}
