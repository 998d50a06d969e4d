use actix_web::{web, HttpResponse};

use super::record_id;
use crate::db::Database;
use crate::error::{ApiError, ErrorBody, ValidationErrorBody};
use crate::models::{Patient, PatientPayload};

/// List all patients
#[utoipa::path(
    get,
    path = "/patients",
    tag = "patients",
    responses(
        (status = 200, description = "List of patients", body = [Patient])
    )
)]
pub async fn list_patients(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(db.list::<Patient>().await)
}

/// Get patient by ID
#[utoipa::path(
    get,
    path = "/patients/{id}",
    tag = "patients",
    params(("id" = u32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient found", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn get_patient(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let patient = db.get::<Patient>(record_id::<Patient>(&id)?).await?;
    Ok(HttpResponse::Ok().json(patient))
}

/// Create a patient
#[utoipa::path(
    post,
    path = "/patients",
    tag = "patients",
    request_body(content = PatientPayload, description = "All fields required"),
    responses(
        (status = 201, description = "Patient created successfully", body = Patient),
        (status = 400, description = "Validation error", body = ValidationErrorBody)
    )
)]
pub async fn create_patient(
    db: web::Data<Database>,
    payload: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    let patient = db.create::<Patient>(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(patient))
}

/// Update patient by ID
#[utoipa::path(
    put,
    path = "/patients/{id}",
    tag = "patients",
    params(("id" = u32, Path, description = "Patient ID")),
    request_body(content = PatientPayload, description = "All fields required"),
    responses(
        (status = 200, description = "Patient updated successfully", body = Patient),
        (status = 400, description = "Validation error", body = ValidationErrorBody),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn update_patient(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Patient>(&id)?;
    let patient = db.replace::<Patient>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(patient))
}

/// Partially update patient by ID
#[utoipa::path(
    patch,
    path = "/patients/{id}",
    tag = "patients",
    params(("id" = u32, Path, description = "Patient ID")),
    request_body(content = PatientPayload, description = "Any subset of fields"),
    responses(
        (status = 200, description = "Patient updated successfully", body = Patient),
        (status = 400, description = "Validation error", body = ValidationErrorBody),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn patch_patient(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Patient>(&id)?;
    let patient = db.patch::<Patient>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(patient))
}

/// Delete patient by ID
#[utoipa::path(
    delete,
    path = "/patients/{id}",
    tag = "patients",
    params(("id" = u32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient deleted successfully", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
pub async fn delete_patient(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let patient = db.delete::<Patient>(record_id::<Patient>(&id)?).await?;
    Ok(HttpResponse::Ok().json(patient))
}
