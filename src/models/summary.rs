use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Statistics served by `GET /summary`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
    pub total_prescriptions: usize,
    /// Appointment count per status.
    pub appointments_by_status: BTreeMap<String, usize>,
    /// Doctor count per specialty.
    pub doctors_by_specialty: BTreeMap<String, usize>,
    /// Mean patient age rounded to the nearest integer, 0 without patients.
    pub average_patient_age: u32,
    /// RFC 3339 UTC time the summary was computed.
    #[schema(example = "2025-09-20T10:00:00.000Z")]
    pub timestamp: String,
    #[schema(example = "operational")]
    pub system_status: String,
}
