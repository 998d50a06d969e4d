//! Record types and their request payloads.
//!
//! Every resource has a stored record type (`Patient`) and a payload type
//! (`PatientPayload`) with all fields optional. The same payload backs
//! create, replace and patch: create and replace additionally require every
//! field to be present, patch only validates what was sent.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod prescription;
pub mod summary;

use validator::Validate;

pub use appointment::{Appointment, AppointmentPayload, AppointmentStatus};
pub use doctor::{Doctor, DoctorPayload};
pub use patient::{Patient, PatientPayload};
pub use prescription::{Prescription, PrescriptionPayload};
pub use summary::Summary;

/// Request body accepted by the write endpoints of a resource.
pub trait Payload: Validate {
    /// Wire names of the required fields that are absent from the body.
    fn missing_fields(&self) -> Vec<&'static str>;
}

pub(crate) fn absent(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

/// Converts an integer that already passed range validation.
pub(crate) fn to_u32(value: Option<i64>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or_default()
}
