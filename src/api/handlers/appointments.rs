use actix_web::{web, HttpResponse};

use super::record_id;
use crate::db::Database;
use crate::error::{ApiError, ErrorBody, ValidationErrorBody};
use crate::models::{Appointment, AppointmentPayload};

/// List all appointments, ordered by id
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    responses(
        (status = 200, description = "List of appointments", body = [Appointment])
    )
)]
pub async fn list_appointments(db: web::Data<Database>) -> HttpResponse {
    HttpResponse::Ok().json(db.list::<Appointment>().await)
}

/// Get appointment by ID
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = u32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment found", body = Appointment),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn get_appointment(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let appointment = db.get::<Appointment>(record_id::<Appointment>(&id)?).await?;
    Ok(HttpResponse::Ok().json(appointment))
}

/// Create an appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    request_body(content = AppointmentPayload, description = "All fields required; patientId and doctorId must reference existing records"),
    responses(
        (status = 201, description = "Appointment created successfully", body = Appointment),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody)
    )
)]
pub async fn create_appointment(
    db: web::Data<Database>,
    payload: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let appointment = db.create::<Appointment>(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(appointment))
}

/// Update appointment by ID
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = u32, Path, description = "Appointment ID")),
    request_body(content = AppointmentPayload, description = "All fields required; patientId and doctorId must reference existing records"),
    responses(
        (status = 200, description = "Appointment updated successfully", body = Appointment),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn update_appointment(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Appointment>(&id)?;
    let appointment = db.replace::<Appointment>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(appointment))
}

/// Partially update appointment by ID (e.g. only `status`)
#[utoipa::path(
    patch,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = u32, Path, description = "Appointment ID")),
    request_body(content = AppointmentPayload, description = "Any subset of fields"),
    responses(
        (status = 200, description = "Appointment updated successfully", body = Appointment),
        (status = 400, description = "Validation error or unknown patient/doctor reference", body = ValidationErrorBody),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn patch_appointment(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = record_id::<Appointment>(&id)?;
    let appointment = db.patch::<Appointment>(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(appointment))
}

/// Delete appointment by ID
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "appointments",
    params(("id" = u32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment deleted successfully", body = Appointment),
        (status = 404, description = "Appointment not found", body = ErrorBody)
    )
)]
pub async fn delete_appointment(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let appointment = db.delete::<Appointment>(record_id::<Appointment>(&id)?).await?;
    Ok(HttpResponse::Ok().json(appointment))
}
