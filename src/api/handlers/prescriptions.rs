use actix_web::{web, HttpResponse};

use super::record_id;
use crate::db::Database;
use crate::error::{ApiError, ErrorBody, ValidationErrorBody};
use crate::models::{Prescription, PrescriptionPayload};

/// List all prescriptions
#[utoipa::path(
    get,
    path = "/prescriptions",
    tag = "prescriptions",
    responses(
        (status = 200, description = "List of prescriptions", body = [Prescription])
    )
)]
pub async fn list_prescriptions(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(db.list::<Prescription>().await)
}

/// Get prescription by ID
#[utoipa::path(
    get,
    path = "/prescriptions/{id}",
    tag = "prescriptions",
    params(("id" = u32, Path, description = "Prescription ID")),
    responses(
        (status = 200, description = "Prescription found", body = Prescription),
        (status = 404, description = "Prescription not found", body = ErrorBody)
    )
)]
pub async fn get_prescription(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let prescription = db.get::<Prescription>(record_id::<Prescription>(&id)?).await?;
    Ok(HttpResponse::Ok().json(prescription))
}

/// Create a prescription
#[utoipa::path(
    post,
    path = "/prescriptions",
    tag = "prescriptions",
    request_body(content = PrescriptionPayload, description = "All fields required; patientId and doctorId must reference existing records"),
    responses(
        (status = 201, description = "Prescription created successfully", body = Prescription),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody)
    )
)]
pub async fn create_prescription(
    db: web::Data<Database>,
    payload: web::Json<PrescriptionPayload>,
) -> Result<HttpResponse, ApiError> {
    let prescription = db.create::<Prescription>(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(prescription))
}

/// Update prescription by ID
#[utoipa::path(
    put,
    path = "/prescriptions/{id}",
    tag = "prescriptions",
    params(("id" = u32, Path, description = "Prescription ID")),
    request_body(content = PrescriptionPayload, description = "All fields required; patientId and doctorId must reference existing records"),
    responses(
        (status = 200, description = "Prescription updated successfully", body = Prescription),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody),
        (status = 404, description = "Prescription not found", body = ErrorBody)
    )
)]
pub async fn update_prescription(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<PrescriptionPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Prescription>(&id)?;
    let prescription = db.replace::<Prescription>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(prescription))
}

/// Partially update prescription by ID
#[utoipa::path(
    patch,
    path = "/prescriptions/{id}",
    tag = "prescriptions",
    params(("id" = u32, Path, description = "Prescription ID")),
    request_body(content = PrescriptionPayload, description = "Any subset of fields"),
    responses(
        (status = 200, description = "Prescription updated successfully", body = Prescription),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody),
        (status = 404, description = "Prescription not found", body = ErrorBody)
    )
)]
pub async fn patch_prescription(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<PrescriptionPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Prescription>(&id)?;
    let prescription = db.patch::<Prescription>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(prescription))
}

/// Delete prescription by ID
#[utoipa::path(
    delete,
    path = "/prescriptions/{id}",
    tag = "prescriptions",
    params(("id" = u32, Path, description = "Prescription ID")),
    responses(
        (status = 200, description = "Prescription deleted successfully", body = Prescription),
        (status = 404, description = "Prescription not found", body = ErrorBody)
    )
)]
pub async fn delete_prescription(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let prescription = db.delete::<Prescription>(record_id::<Prescription>(&id)?).await?;
    Ok(HttpResponse::Ok().json(prescription))
}
