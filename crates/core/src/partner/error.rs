use thiserror::Error;

/// Errors raised while validating partner and contact requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{request} must not be null")]
    NullRequest { request: &'static str },
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },
    #[error("{entity} id is required for update")]
    MissingId { entity: &'static str },
}
