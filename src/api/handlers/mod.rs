//! Request handlers, one module per resource.

pub mod appointments;
pub mod doctors;
pub mod pages;
pub mod patients;
pub mod prescriptions;
pub mod summary;

use crate::db::Record;
use crate::error::ApiError;

/// Parses the `{id}` path segment. Anything that is not a record id cannot
/// name a record, so it is a 404 rather than a 400.
pub(crate) fn record_id<R: Record>(raw: &str) -> Result<u32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(R::RESOURCE))
}
