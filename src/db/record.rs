use serde::Serialize;

use super::{Collection, Tables};
use crate::models::{
    Appointment, AppointmentPayload, Doctor, DoctorPayload, Patient, PatientPayload, Payload,
    Prescription, PrescriptionPayload,
};

/// Patient and doctor referenced by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub patient_id: u32,
    pub doctor_id: u32,
}

/// A record type stored in one of the [`Tables`].
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Singular display name used in error messages, e.g. `"Patient"`.
    const RESOURCE: &'static str;

    type Payload: Payload + Send;

    fn id(&self) -> u32;

    /// Builds a record from a payload that has every field present.
    fn build(id: u32, payload: Self::Payload) -> Self;

    /// Overwrites the fields present in `payload`.
    fn merge(&mut self, payload: Self::Payload);

    fn links(&self) -> Option<Links> {
        None
    }

    fn collection(tables: &Tables) -> &Collection<Self>;

    fn collection_mut(tables: &mut Tables) -> &mut Collection<Self>;
}

impl Record for Patient {
    const RESOURCE: &'static str = "Patient";
    type Payload = PatientPayload;

    fn id(&self) -> u32 {
        self.id
    }

    fn build(id: u32, payload: PatientPayload) -> Self {
        Patient::from_payload(id, payload)
    }

    fn merge(&mut self, payload: PatientPayload) {
        Patient::merge(self, payload)
    }

    fn collection(tables: &Tables) -> &Collection<Self> {
        &tables.patients
    }

    fn collection_mut(tables: &mut Tables) -> &mut Collection<Self> {
        &mut tables.patients
    }
}

impl Record for Doctor {
    const RESOURCE: &'static str = "Doctor";
    type Payload = DoctorPayload;

    fn id(&self) -> u32 {
        self.id
    }

    fn build(id: u32, payload: DoctorPayload) -> Self {
        Doctor::from_payload(id, payload)
    }

    fn merge(&mut self, payload: DoctorPayload) {
        Doctor::merge(self, payload)
    }

    fn collection(tables: &Tables) -> &Collection<Self> {
        &tables.doctors
    }

    fn collection_mut(tables: &mut Tables) -> &mut Collection<Self> {
        &mut tables.doctors
    }
}

impl Record for Appointment {
    const RESOURCE: &'static str = "Appointment";
    type Payload = AppointmentPayload;

    fn id(&self) -> u32 {
        self.id
    }

    fn build(id: u32, payload: AppointmentPayload) -> Self {
        Appointment::from_payload(id, payload)
    }

    fn merge(&mut self, payload: AppointmentPayload) {
        Appointment::merge(self, payload)
    }

    fn links(&self) -> Option<Links> {
        Some(Links {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
        })
    }

    fn collection(tables: &Tables) -> &Collection<Self> {
        &tables.appointments
    }

    fn collection_mut(tables: &mut Tables) -> &mut Collection<Self> {
        &mut tables.appointments
    }
}

impl Record for Prescription {
    const RESOURCE: &'static str = "Prescription";
    type Payload = PrescriptionPayload;

    fn id(&self) -> u32 {
        self.id
    }

    fn build(id: u32, payload: PrescriptionPayload) -> Self {
        Prescription::from_payload(id, payload)
    }

    fn merge(&mut self, payload: PrescriptionPayload) {
        Prescription::merge(self, payload)
    }

    fn links(&self) -> Option<Links> {
        Some(Links {
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
        })
    }

    fn collection(tables: &Tables) -> &Collection<Self> {
        &tables.prescriptions
    }

    fn collection_mut(tables: &mut Tables) -> &mut Collection<Self> {
        &mut tables.prescriptions
    }
}
