use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{absent, Payload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Dr. Alice Johnson")]
    pub name: String,
    #[schema(example = "Cardiology")]
    pub specialty: String,
    #[schema(example = "alice.johnson@hospital.com")]
    pub contact_info: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "specialty must not be empty"))]
    pub specialty: Option<String>,
    #[validate(length(min = 1, message = "contactInfo must not be empty"))]
    pub contact_info: Option<String>,
}

impl Payload for DoctorPayload {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("name", self.name.is_some()),
            ("specialty", self.specialty.is_some()),
            ("contactInfo", self.contact_info.is_some()),
        ])
    }
}

impl Doctor {
    pub fn from_payload(id: u32, payload: DoctorPayload) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            specialty: payload.specialty.unwrap_or_default(),
            contact_info: payload.contact_info.unwrap_or_default(),
        }
    }

    pub fn merge(&mut self, payload: DoctorPayload) {
        if let Some(name) = payload.name {
            self.name = name;
        }
        if let Some(specialty) = payload.specialty {
            self.specialty = specialty;
        }
        if let Some(contact) = payload.contact_info {
            self.contact_info = contact;
        }
    }
}
