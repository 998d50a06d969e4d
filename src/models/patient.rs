use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{absent, to_u32, Payload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = 30)]
    pub age: u32,
    #[schema(example = "male")]
    pub gender: String,
    #[schema(example = "Asthma")]
    pub medical_history: String,
    #[schema(example = "john.doe@email.com")]
    pub contact_info: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 4294967295, message = "age must be a non-negative integer"))]
    pub age: Option<i64>,
    #[validate(length(min = 1, message = "gender must not be empty"))]
    pub gender: Option<String>,
    #[validate(length(min = 1, message = "medicalHistory must not be empty"))]
    pub medical_history: Option<String>,
    #[validate(length(min = 1, message = "contactInfo must not be empty"))]
    pub contact_info: Option<String>,
}

impl Payload for PatientPayload {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("name", self.name.is_some()),
            ("age", self.age.is_some()),
            ("gender", self.gender.is_some()),
            ("medicalHistory", self.medical_history.is_some()),
            ("contactInfo", self.contact_info.is_some()),
        ])
    }
}

impl Patient {
    pub fn from_payload(id: u32, payload: PatientPayload) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            age: to_u32(payload.age),
            gender: payload.gender.unwrap_or_default(),
            medical_history: payload.medical_history.unwrap_or_default(),
            contact_info: payload.contact_info.unwrap_or_default(),
        }
    }

    pub fn merge(&mut self, payload: PatientPayload) {
        if let Some(name) = payload.name {
            self.name = name;
        }
        if payload.age.is_some() {
            self.age = to_u32(payload.age);
        }
        if let Some(gender) = payload.gender {
            self.gender = gender;
        }
        if let Some(history) = payload.medical_history {
            self.medical_history = history;
        }
        if let Some(contact) = payload.contact_info {
            self.contact_info = contact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_reports_every_field_missing() {
        let missing = PatientPayload::default().missing_fields();
        assert_eq!(
            missing,
            vec!["name", "age", "gender", "medicalHistory", "contactInfo"]
        );
    }

    #[test]
    fn negative_age_is_rejected() {
        let payload = PatientPayload {
            age: Some(-1),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn large_age_is_accepted() {
        let payload = PatientPayload {
            age: Some(151),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
        assert_eq!(Patient::from_payload(1, payload).age, 151);
    }

    #[test]
    fn merge_only_touches_sent_fields() {
        let mut patient = Patient {
            id: 4,
            name: "Emily Davis".into(),
            age: 32,
            gender: "female".into(),
            medical_history: "Allergies (peanuts)".into(),
            contact_info: "emily.davis@email.com".into(),
        };
        patient.merge(PatientPayload {
            age: Some(33),
            ..Default::default()
        });

        assert_eq!(patient.age, 33);
        assert_eq!(patient.name, "Emily Davis");
        assert_eq!(patient.id, 4);
    }

    #[test]
    fn payload_reads_camel_case_body() {
        let payload: PatientPayload = serde_json::from_str(
            r#"{"name":"Ann","age":50,"gender":"female","medicalHistory":"None","contactInfo":"ann@x.org","id":99}"#,
        )
        .unwrap();
        assert!(payload.missing_fields().is_empty());

        let patient = Patient::from_payload(16, payload);
        assert_eq!(patient.id, 16);
        assert_eq!(patient.medical_history, "None");
    }
}
