use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{absent, to_u32, Payload};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    InProgress,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::InProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::InProgress => "in-progress",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown appointment status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = 1)]
    pub patient_id: u32,
    #[schema(example = 3)]
    pub doctor_id: u32,
    #[schema(example = "2025-09-25")]
    pub date: String,
    #[schema(example = "14:30")]
    pub time: String,
    #[schema(example = "Annual checkup")]
    pub reason: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    #[validate(range(min = 1, max = 4294967295, message = "patientId must be a positive integer"))]
    pub patient_id: Option<i64>,
    #[validate(range(min = 1, max = 4294967295, message = "doctorId must be a positive integer"))]
    pub doctor_id: Option<i64>,
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: Option<String>,
    #[validate(length(min = 1, message = "time must not be empty"))]
    pub time: Option<String>,
    #[validate(length(min = 1, message = "reason must not be empty"))]
    pub reason: Option<String>,
    #[validate(custom = "validate_status")]
    #[schema(example = "scheduled")]
    pub status: Option<String>,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    match status.parse::<AppointmentStatus>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("status");
            error.message = Some(Cow::from(
                "status must be one of scheduled, completed, cancelled, in-progress",
            ));
            error.add_param(Cow::from("value"), &status);
            Err(error)
        }
    }
}

impl Payload for AppointmentPayload {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("patientId", self.patient_id.is_some()),
            ("doctorId", self.doctor_id.is_some()),
            ("date", self.date.is_some()),
            ("time", self.time.is_some()),
            ("reason", self.reason.is_some()),
            ("status", self.status.is_some()),
        ])
    }
}

fn to_status(status: Option<&str>) -> AppointmentStatus {
    status.and_then(|s| s.parse().ok()).unwrap_or_default()
}

impl Appointment {
    pub fn from_payload(id: u32, payload: AppointmentPayload) -> Self {
        Self {
            id,
            patient_id: to_u32(payload.patient_id),
            doctor_id: to_u32(payload.doctor_id),
            date: payload.date.unwrap_or_default(),
            time: payload.time.unwrap_or_default(),
            reason: payload.reason.unwrap_or_default(),
            status: to_status(payload.status.as_deref()),
        }
    }

    pub fn merge(&mut self, payload: AppointmentPayload) {
        if payload.patient_id.is_some() {
            self.patient_id = to_u32(payload.patient_id);
        }
        if payload.doctor_id.is_some() {
            self.doctor_id = to_u32(payload.doctor_id);
        }
        if let Some(date) = payload.date {
            self.date = date;
        }
        if let Some(time) = payload.time {
            self.time = time;
        }
        if let Some(reason) = payload.reason {
            self.reason = reason;
        }
        if payload.status.is_some() {
            self.status = to_status(payload.status.as_deref());
        }
    }
}
