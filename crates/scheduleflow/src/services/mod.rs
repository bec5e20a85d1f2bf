//! Partner and contact use-cases.
//!
//! Services sit between the HTTP handlers and the repository trait objects.
//! They validate requests, check existence and map entities to response DTOs.

mod contact;
mod error;
mod partner;

pub use contact::PartnerContactService;
pub use error::ServiceError;
pub use partner::PartnerService;
