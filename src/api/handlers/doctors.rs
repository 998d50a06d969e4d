use actix_web::{web, HttpResponse};

use super::record_id;
use crate::db::Database;
use crate::error::{ApiError, ErrorBody, ValidationErrorBody};
use crate::models::{Doctor, DoctorPayload};

/// List all doctors
#[utoipa::path(
    get,
    path = "/doctors",
    tag = "doctors",
    responses(
        (status = 200, description = "List of doctors", body = [Doctor])
    )
)]
pub async fn list_doctors(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(db.list::<Doctor>().await)
}

/// Get doctor by ID
#[utoipa::path(
    get,
    path = "/doctors/{id}",
    tag = "doctors",
    params(("id" = u32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Doctor found", body = Doctor),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn get_doctor(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let doctor = db.get::<Doctor>(record_id::<Doctor>(&id)?).await?;
    Ok(HttpResponse::Ok().json(doctor))
}

/// Create a doctor
#[utoipa::path(
    post,
    path = "/doctors",
    tag = "doctors",
    request_body(content = DoctorPayload, description = "All fields required"),
    responses(
        (status = 201, description = "Doctor created successfully", body = Doctor),
        (status = 400, description = "Validation error", body = ValidationErrorBody)
    )
)]
pub async fn create_doctor(
    db: web::Data<Database>,
    payload: web::Json<DoctorPayload>,
) -> Result<HttpResponse, ApiError> {
    let doctor = db.create::<Doctor>(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(doctor))
}

/// Update doctor by ID
#[utoipa::path(
    put,
    path = "/doctors/{id}",
    tag = "doctors",
    params(("id" = u32, Path, description = "Doctor ID")),
    request_body(content = DoctorPayload, description = "All fields required"),
    responses(
        (status = 200, description = "Doctor updated successfully", body = Doctor),
        (status = 400, description = "Validation error", body = ValidationErrorBody),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn update_doctor(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<DoctorPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Doctor>(&id)?;
    let doctor = db.replace::<Doctor>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doctor))
}

/// Partially update doctor by ID
#[utoipa::path(
    patch,
    path = "/doctors/{id}",
    tag = "doctors",
    params(("id" = u32, Path, description = "Doctor ID")),
    request_body(content = DoctorPayload, description = "Any subset of fields"),
    responses(
        (status = 200, description = "Doctor updated successfully", body = Doctor),
        (status = 400, description = "Validation error", body = ValidationErrorBody),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn patch_doctor(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<DoctorPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Doctor>(&id)?;
    let doctor = db.patch::<Doctor>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doctor))
}

/// Delete doctor by ID
///
/// Appointments and prescriptions that reference the doctor are kept.
#[utoipa::path(
    delete,
    path = "/doctors/{id}",
    tag = "doctors",
    params(("id" = u32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Doctor deleted successfully", body = Doctor),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
pub async fn delete_doctor(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let doctor = db.delete::<Doctor>(record_id::<Doctor>(&id)?).await?;
    Ok(HttpResponse::Ok().json(doctor))
}
