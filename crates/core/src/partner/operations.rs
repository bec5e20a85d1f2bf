use super::error::ValidationError;
use super::requests::{PartnerContactRequest, PartnerRequest};

/// Unwraps a request body, failing when it was absent.
pub fn require_request<T>(request: Option<T>, name: &'static str) -> Result<T, ValidationError> {
    request.ok_or(ValidationError::NullRequest { request: name })
}

/// Fails when a required string is missing or blank.
pub fn require_text(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::MissingRequiredField { field }),
    }
}

/// Fails when an update payload does not name the record it targets.
pub fn require_id(id: Option<i64>, entity: &'static str) -> Result<i64, ValidationError> {
    id.ok_or(ValidationError::MissingId { entity })
}

/// Validates a partner request before creation or update.
pub fn validate_partner_request(request: &PartnerRequest) -> Result<(), ValidationError> {
    require_text(request.company_name.as_deref(), "companyName")
}

/// Validates a partner contact request before creation or update.
pub fn validate_contact_request(request: &PartnerContactRequest) -> Result<(), ValidationError> {
    require_text(request.name.as_deref(), "name")
}
