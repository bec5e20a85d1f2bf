//! API request types for partner operations.
//!
//! Pure data types with no I/O. Required fields are kept optional here so a
//! `null` or missing value reaches validation instead of failing
//! deserialization; see [`super::validate_partner_request`].

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{ContactId, Partner, PartnerContact, PartnerId};
use crate::serde::deserialize_optional_string;

/// Request payload for creating or updating a partner.
///
/// `id` is ignored on create and required on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PartnerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl PartnerRequest {
    /// Create a new request with just a company name.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: PartnerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_main_phone(mut self, main_phone: impl Into<String>) -> Self {
        self.main_phone = Some(main_phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert into a new, unpersisted partner. Any `id` in the request is dropped.
    ///
    /// Callers validate first; an absent company name becomes an empty string.
    pub fn into_partner(self) -> Partner {
        let mut partner = Partner::new(self.company_name.unwrap_or_default());
        partner.main_phone = self.main_phone;
        partner.address = self.address;
        partner.description = self.description;
        partner
    }

    /// Replace every editable field of `partner` with the request's values.
    ///
    /// PUT semantics: optional fields missing from the request are cleared.
    /// The id and creation time are kept.
    pub fn apply_to(self, partner: &mut Partner) {
        if let Some(company_name) = self.company_name {
            partner.company_name = company_name;
        }
        partner.main_phone = self.main_phone;
        partner.address = self.address;
        partner.description = self.description;
        partner.updated_at = Utc::now();
    }
}

/// Request payload for creating or updating a partner contact.
///
/// The owning partner always comes from the route, never from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl PartnerContactRequest {
    /// Create a new request with just a contact name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Convert into a new, unpersisted contact owned by `partner_id`.
    pub fn into_contact(self, partner_id: PartnerId) -> PartnerContact {
        let mut contact = PartnerContact::new(partner_id, self.name.unwrap_or_default());
        contact.position = self.position;
        contact.department = self.department;
        contact.phone = self.phone;
        contact.email = self.email;
        contact
    }

    /// Replace every editable field of `contact` (PUT semantics).
    pub fn apply_to(self, contact: &mut PartnerContact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        contact.position = self.position;
        contact.department = self.department;
        contact.phone = self.phone;
        contact.email = self.email;
        contact.updated_at = Utc::now();
    }
}

/// Query parameters for `GET /partners/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPartnersQuery {
    #[serde(default)]
    pub name: Option<String>,
}
