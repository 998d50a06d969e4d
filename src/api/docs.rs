//! OpenAPI document and the interactive viewer.

use actix_web::{http::header::ContentType, HttpResponse};
use utoipa::OpenApi;

use super::handlers::{appointments, doctors, patients, prescriptions, summary};
use crate::error::{ErrorBody, FieldError, ValidationErrorBody};
use crate::models::{
    Appointment, AppointmentPayload, AppointmentStatus, Doctor, DoctorPayload, Patient,
    PatientPayload, Prescription, PrescriptionPayload, Summary,
};

const VIEWER_PAGE: &str = include_str!("../../web/api-docs.html");

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Healthcare Demo API",
        version = "1.0.0",
        description = "API for managing patients, doctors, appointments, and prescriptions."
    ),
    paths(
        patients::list_patients,
        patients::get_patient,
        patients::create_patient,
        patients::update_patient,
        patients::patch_patient,
        patients::delete_patient,
        doctors::list_doctors,
        doctors::get_doctor,
        doctors::create_doctor,
        doctors::update_doctor,
        doctors::patch_doctor,
        doctors::delete_doctor,
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment,
        appointments::patch_appointment,
        appointments::delete_appointment,
        prescriptions::list_prescriptions,
        prescriptions::get_prescription,
        prescriptions::create_prescription,
        prescriptions::update_prescription,
        prescriptions::patch_prescription,
        prescriptions::delete_prescription,
        summary::get_summary
    ),
    components(schemas(
        Patient,
        PatientPayload,
        Doctor,
        DoctorPayload,
        Appointment,
        AppointmentPayload,
        AppointmentStatus,
        Prescription,
        PrescriptionPayload,
        Summary,
        ErrorBody,
        FieldError,
        ValidationErrorBody
    )),
    tags(
        (name = "patients", description = "Patient records"),
        (name = "doctors", description = "Doctor records"),
        (name = "appointments", description = "Appointments between patients and doctors"),
        (name = "prescriptions", description = "Prescriptions issued by doctors"),
        (name = "summary", description = "Aggregated statistics")
    )
)]
pub struct ApiDoc;

/// Raw OpenAPI document at `/swagger.json`.
pub async fn swagger_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Swagger UI at `/api-docs`, pointed at `/swagger.json`.
pub async fn api_docs() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(VIEWER_PAGE)
}
