use thiserror::Error;

use scheduleflow_core::partner::ValidationError;
use scheduleflow_core::storage::{
    repository_error_to_status_code, validation_error_to_status_code, RepositoryError,
};

/// Errors returned by the partner and contact services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Shorthand for a missing entity.
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        Self::Repository(RepositoryError::not_found(entity_type, id))
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(err) => validation_error_to_status_code(err),
            Self::Repository(err) => repository_error_to_status_code(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ServiceError = ValidationError::MissingRequiredField {
            field: "companyName",
        }
        .into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "companyName is required");
    }

    #[test]
    fn test_not_found_is_404() {
        let err = ServiceError::not_found("Partner", 3);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "Partner not found: 3");
    }

    #[test]
    fn test_connection_failure_is_503() {
        let err: ServiceError = RepositoryError::ConnectionFailed("closed".to_string()).into();
        assert_eq!(err.status_code(), 503);
    }
}
