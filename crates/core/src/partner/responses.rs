//! API response types for partner operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ContactId, Partner, PartnerContact, PartnerId};

/// Response payload describing a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResponse {
    pub id: Option<PartnerId>,
    pub company_name: String,
    pub main_phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            company_name: partner.company_name,
            main_phone: partner.main_phone,
            address: partner.address,
            description: partner.description,
            created_at: partner.created_at,
            updated_at: partner.updated_at,
        }
    }
}

/// Response payload describing a partner contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContactResponse {
    pub id: Option<ContactId>,
    pub partner_id: PartnerId,
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PartnerContact> for PartnerContactResponse {
    fn from(contact: PartnerContact) -> Self {
        Self {
            id: contact.id,
            partner_id: contact.partner_id,
            name: contact.name,
            position: contact.position,
            department: contact.department,
            phone: contact.phone,
            email: contact.email,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
