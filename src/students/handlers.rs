use super::error::StudentError;
use super::protocol::*;
use super::service::StudentService;
use super::types::Student;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

/// Builds the route table with the service attached as an extension.
pub fn router(service: Arc<StudentService>) -> Router {
    Router::new()
        .route(ENDPOINT_STUDENT, post(handle_add_student))
        .route(
            ENDPOINT_STUDENT_BY_ID,
            get(handle_get_student)
                .put(handle_update_student)
                .delete(handle_delete_student),
        )
        .route(ENDPOINT_STUDENTS, get(handle_list_students))
        .layer(Extension(service))
}

pub async fn handle_add_student(
    Extension(service): Extension<Arc<StudentService>>,
    body: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, &'static str), StudentError> {
    let Json(student) = body.map_err(|e| StudentError::Request(e.body_text()))?;
    service.add(student);
    Ok((StatusCode::CREATED, MSG_STUDENT_ADDED))
}

pub async fn handle_update_student(
    Extension(service): Extension<Arc<StudentService>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Student>, JsonRejection>,
) -> Result<Json<Student>, StudentError> {
    let Path(id) = id.map_err(|e| StudentError::Request(e.body_text()))?;
    let Json(new_data) = body.map_err(|e| StudentError::Request(e.body_text()))?;
    let student = service.update(id, new_data)?;
    Ok(Json(student))
}

pub async fn handle_get_student(
    Extension(service): Extension<Arc<StudentService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>, StudentError> {
    let Path(id) = id.map_err(|e| StudentError::Request(e.body_text()))?;
    let student = service.get_by_id(id)?;
    tracing::debug!("GET: Found student {}", id);
    Ok(Json(student))
}

pub async fn handle_list_students(
    Extension(service): Extension<Arc<StudentService>>,
) -> Json<Vec<Student>> {
    Json(service.list_all())
}

pub async fn handle_delete_student(
    Extension(service): Extension<Arc<StudentService>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<&'static str, StudentError> {
    let Path(id) = id.map_err(|e| StudentError::Request(e.body_text()))?;
    service.delete(id)?;
    Ok(MSG_STUDENT_DELETED)
}
