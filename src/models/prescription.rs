use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{absent, to_u32, Payload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = 1)]
    pub patient_id: u32,
    #[schema(example = 8)]
    pub doctor_id: u32,
    #[schema(example = "Aspirin")]
    pub medication: String,
    #[schema(example = "100mg")]
    pub dosage: String,
    #[schema(example = "Once daily with food")]
    pub instructions: String,
    #[schema(example = "2025-09-15")]
    pub date_issued: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPayload {
    #[validate(range(min = 1, max = 4294967295, message = "patientId must be a positive integer"))]
    pub patient_id: Option<i64>,
    #[validate(range(min = 1, max = 4294967295, message = "doctorId must be a positive integer"))]
    pub doctor_id: Option<i64>,
    #[validate(length(min = 1, message = "medication must not be empty"))]
    pub medication: Option<String>,
    #[validate(length(min = 1, message = "dosage must not be empty"))]
    pub dosage: Option<String>,
    #[validate(length(min = 1, message = "instructions must not be empty"))]
    pub instructions: Option<String>,
    #[validate(length(min = 1, message = "dateIssued must not be empty"))]
    pub date_issued: Option<String>,
}

impl Payload for PrescriptionPayload {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("patientId", self.patient_id.is_some()),
            ("doctorId", self.doctor_id.is_some()),
            ("medication", self.medication.is_some()),
            ("dosage", self.dosage.is_some()),
            ("instructions", self.instructions.is_some()),
            ("dateIssued", self.date_issued.is_some()),
        ])
    }
}

impl Prescription {
    pub fn from_payload(id: u32, payload: PrescriptionPayload) -> Self {
        Self {
            id,
            patient_id: to_u32(payload.patient_id),
            doctor_id: to_u32(payload.doctor_id),
            medication: payload.medication.unwrap_or_default(),
            dosage: payload.dosage.unwrap_or_default(),
            instructions: payload.instructions.unwrap_or_default(),
            date_issued: payload.date_issued.unwrap_or_default(),
        }
    }

    pub fn merge(&mut self, payload: PrescriptionPayload) {
        if payload.patient_id.is_some() {
            self.patient_id = to_u32(payload.patient_id);
        }
        if payload.doctor_id.is_some() {
            self.doctor_id = to_u32(payload.doctor_id);
        }
        if let Some(medication) = payload.medication {
            self.medication = medication;
        }
        if let Some(dosage) = payload.dosage {
            self.dosage = dosage;
        }
        if let Some(instructions) = payload.instructions {
            self.instructions = instructions;
        }
        if let Some(date) = payload.date_issued {
            self.date_issued = date;
        }
    }
}
