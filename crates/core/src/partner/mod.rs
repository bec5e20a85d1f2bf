mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::ValidationError;
pub use operations::{
    require_id, require_request, require_text, validate_contact_request, validate_partner_request,
};
pub use requests::{PartnerContactRequest, PartnerRequest, SearchPartnersQuery};
pub use responses::{PartnerContactResponse, PartnerResponse};
pub use types::{ContactId, Partner, PartnerContact, PartnerId};
