//! Error types shared by the record store and the HTTP layer.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One entry of a `400` response body.
///
/// The shape follows the request validators the admin frontend was written
/// against: `{type, value, msg, path, location}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "field")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[schema(value_type = String, example = "body")]
    pub location: &'static str,
}

impl FieldError {
    pub fn field(path: &str, msg: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            kind: "field",
            value,
            msg: msg.into(),
            path: Some(path.to_string()),
            location: "body",
        }
    }

    pub fn required(path: &str) -> Self {
        Self::field(path, format!("{} is required", path), None)
    }

    /// Error for a body that could not be parsed at all.
    pub fn body(msg: impl Into<String>) -> Self {
        Self {
            kind: "body",
            value: None,
            msg: msg.into(),
            path: None,
            location: "body",
        }
    }

    /// Flattens `validator` output into field entries keyed by wire name,
    /// ordered by path.
    pub fn from_validation(errors: &ValidationErrors) -> Vec<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(name, _)| *name);

        fields
            .into_iter()
            .flat_map(|(name, errors)| {
                let path = wire_name(name);
                errors.iter().map(move |error| {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    Self::field(&path, msg, error.params.get("value").cloned())
                })
            })
            .collect()
    }
}

/// Converts a Rust field name (`medical_history`) into its JSON name
/// (`medicalHistory`).
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Body of a `404` / `401` / `500` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a `400` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("missing or invalid bearer token")]
    Unauthorized,
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(FieldError::from_validation(&errors))
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        ApiError::Validation(vec![FieldError::body(err.to_string())])
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(errors) => response.json(ValidationErrorBody {
                errors: errors.clone(),
            }),
            other => response.json(ErrorBody {
                error: other.to_string(),
            }),
        }
    }
}
