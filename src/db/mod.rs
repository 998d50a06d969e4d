//! In-memory record store for the healthcare demo service.
//!
//! All four collections sit behind one async read/write lock. Reads share
//! the lock; every write (including the `max(id) + 1` computation) runs under
//! the exclusive guard, so concurrent creates never hand out the same id.

mod collection;
mod record;
pub mod seed;

use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::core::stats;
use crate::error::{ApiError, FieldError};
use crate::models::{Appointment, Doctor, Patient, Payload, Prescription, Summary};

pub use collection::Collection;
pub use record::{Links, Record};

/// The four resource collections.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub patients: Collection<Patient>,
    pub doctors: Collection<Doctor>,
    pub appointments: Collection<Appointment>,
    pub prescriptions: Collection<Prescription>,
}

impl Tables {
    /// Tables loaded with the demo data set.
    pub fn seeded() -> Self {
        seed::demo_tables()
    }

    /// Checks that the patient and doctor a record points at exist.
    ///
    /// Only references that differ from `before` are checked, so patching an
    /// unrelated field of a record whose patient was deleted still succeeds.
    fn check_links(&self, before: Option<Links>, after: Option<Links>) -> Result<(), ApiError> {
        let Some(after) = after else {
            return Ok(());
        };

        let mut errors = Vec::new();
        let patient_changed = before.map_or(true, |b| b.patient_id != after.patient_id);
        if patient_changed && !self.patients.contains(after.patient_id) {
            errors.push(FieldError::field(
                "patientId",
                format!("Patient {} does not exist", after.patient_id),
                Some(json!(after.patient_id)),
            ));
        }
        let doctor_changed = before.map_or(true, |b| b.doctor_id != after.doctor_id);
        if doctor_changed && !self.doctors.contains(after.doctor_id) {
            errors.push(FieldError::field(
                "doctorId",
                format!("Doctor {} does not exist", after.doctor_id),
                Some(json!(after.doctor_id)),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

/// Validates a create/replace payload: every field present and well formed.
fn validate_complete<P: Payload>(payload: &P) -> Result<(), ApiError> {
    let mut errors = match payload.validate() {
        Ok(()) => Vec::new(),
        Err(e) => FieldError::from_validation(&e),
    };
    errors.extend(payload.missing_fields().into_iter().map(FieldError::required));

    if errors.is_empty() {
        return Ok(());
    }
    errors.sort_by(|a, b| a.path.cmp(&b.path));
    Err(ApiError::Validation(errors))
}

/// Shared, process-wide record store.
#[derive(Debug, Default)]
pub struct Database {
    tables: RwLock<Tables>,
}

impl Database {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::new(Tables::seeded())
    }

    /// Every record of `R`, ordered by id.
    pub async fn list<R: Record>(&self) -> Vec<R> {
        let tables = self.tables.read().await;
        R::collection(&tables).iter().cloned().collect()
    }

    pub async fn count<R: Record>(&self) -> usize {
        let tables = self.tables.read().await;
        R::collection(&tables).len()
    }

    pub async fn get<R: Record>(&self, id: u32) -> Result<R, ApiError> {
        let tables = self.tables.read().await;
        R::collection(&tables)
            .get(id)
            .cloned()
            .ok_or(ApiError::NotFound(R::RESOURCE))
    }

    #[instrument(skip(self, payload), fields(resource = R::RESOURCE))]
    pub async fn create<R: Record>(&self, payload: R::Payload) -> Result<R, ApiError> {
        validate_complete(&payload)?;

        let mut tables = self.tables.write().await;
        let record = R::build(R::collection(&tables).next_id(), payload);
        tables.check_links(None, record.links())?;
        R::collection_mut(&mut tables).insert(record.clone());

        info!(id = record.id(), "{} created", R::RESOURCE);
        Ok(record)
    }

    /// Replaces every field of record `id` except the id itself.
    #[instrument(skip(self, payload), fields(resource = R::RESOURCE))]
    pub async fn replace<R: Record>(&self, id: u32, payload: R::Payload) -> Result<R, ApiError> {
        let mut tables = self.tables.write().await;
        if !R::collection(&tables).contains(id) {
            return Err(ApiError::NotFound(R::RESOURCE));
        }
        validate_complete(&payload)?;

        let record = R::build(id, payload);
        tables.check_links(None, record.links())?;
        R::collection_mut(&mut tables).insert(record.clone());

        info!("{} replaced", R::RESOURCE);
        Ok(record)
    }

    /// Shallow merge of the fields present in `payload` onto record `id`.
    #[instrument(skip(self, payload), fields(resource = R::RESOURCE))]
    pub async fn patch<R: Record>(&self, id: u32, payload: R::Payload) -> Result<R, ApiError> {
        let mut tables = self.tables.write().await;
        let mut record = R::collection(&tables)
            .get(id)
            .cloned()
            .ok_or(ApiError::NotFound(R::RESOURCE))?;
        payload.validate()?;

        let before = record.links();
        record.merge(payload);
        tables.check_links(before, record.links())?;
        R::collection_mut(&mut tables).insert(record.clone());

        info!("{} patched", R::RESOURCE);
        Ok(record)
    }

    /// Removes record `id` and returns it. Dependent records are kept.
    #[instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn delete<R: Record>(&self, id: u32) -> Result<R, ApiError> {
        let mut tables = self.tables.write().await;
        let record = R::collection_mut(&mut tables)
            .remove(id)
            .ok_or(ApiError::NotFound(R::RESOURCE))?;

        info!("{} deleted", R::RESOURCE);
        Ok(record)
    }

    pub async fn summary(&self) -> Summary {
        let tables = self.tables.read().await;
        debug!("computing summary");
        stats::summarize(&tables, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{AppointmentPayload, AppointmentStatus, DoctorPayload, PatientPayload};

    fn doctor_payload(n: usize) -> DoctorPayload {
        DoctorPayload {
            name: Some(format!("Dr. Number {}", n)),
            specialty: Some("Radiology".into()),
            contact_info: Some(format!("dr{}@hospital.com", n)),
        }
    }

    fn paths(err: ApiError) -> Vec<String> {
        match err {
            ApiError::Validation(errors) => errors.into_iter().filter_map(|e| e.path).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_sequential_ids() {
        let db = Arc::new(Database::empty());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let db = Arc::clone(&db);
                tokio::spawn(async move { db.create::<Doctor>(doctor_payload(n)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=64).collect::<Vec<u32>>());
        assert_eq!(db.count::<Doctor>().await, 64);
    }

    #[tokio::test]
    async fn create_reports_missing_fields() {
        let db = Database::empty();
        let err = db
            .create::<Patient>(PatientPayload {
                name: Some("Ann".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(paths(err), vec!["age", "contactInfo", "gender", "medicalHistory"]);
        assert_eq!(db.count::<Patient>().await, 0);
    }

    #[tokio::test]
    async fn appointment_must_reference_existing_records() {
        let db = Database::seeded();
        let err = db
            .create::<Appointment>(AppointmentPayload {
                patient_id: Some(99),
                doctor_id: Some(1),
                date: Some("2025-10-10".into()),
                time: Some("10:00".into()),
                reason: Some("Check".into()),
                status: Some("scheduled".into()),
            })
            .await
            .unwrap_err();

        assert_eq!(paths(err), vec!["patientId"]);
    }

    #[tokio::test]
    async fn replace_checks_existence_before_payload() {
        let db = Database::seeded();
        let err = db
            .replace::<Patient>(500, PatientPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound("Patient")));
    }

    #[tokio::test]
    async fn patch_survives_dangling_reference() {
        let db = Database::seeded();
        db.delete::<Patient>(3).await.unwrap();

        let updated = db
            .patch::<Appointment>(
                3,
                AppointmentPayload {
                    status: Some("in-progress".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, AppointmentStatus::InProgress);
        assert_eq!(updated.patient_id, 3);
    }

    #[tokio::test]
    async fn patch_rejects_invalid_fields() {
        let db = Database::seeded();
        let err = db
            .patch::<Patient>(
                1,
                PatientPayload {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(paths(err), vec!["name"]);
        assert_eq!(db.get::<Patient>(1).await.unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn delete_does_not_cascade() {
        let db = Database::seeded();
        let appointments = db.count::<Appointment>().await;

        let removed = db.delete::<Doctor>(8).await.unwrap();
        assert_eq!(removed.id, 8);
        assert_eq!(db.count::<Appointment>().await, appointments);
        assert!(matches!(
            db.delete::<Doctor>(8).await,
            Err(ApiError::NotFound("Doctor"))
        ));
    }

    #[tokio::test]
    async fn deleted_maximum_id_is_reused() {
        let db = Database::seeded();
        db.delete::<Doctor>(10).await.unwrap();
        let doctor = db.create::<Doctor>(doctor_payload(1)).await.unwrap();
        assert_eq!(doctor.id, 10);
    }
}
