use async_trait::async_trait;

use crate::partner::{ContactId, Partner, PartnerContact, PartnerId};

use super::Result;

/// Repository for partner operations.
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Gets every partner, ordered by id.
    async fn find_all_partners(&self) -> Result<Vec<Partner>>;

    /// Gets a partner by its ID.
    async fn find_partner_by_id(&self, id: PartnerId) -> Result<Option<Partner>>;

    /// Gets partners whose company name contains `name` (case-sensitive).
    async fn find_partners_by_name_contains(&self, name: &str) -> Result<Vec<Partner>>;

    /// Inserts the partner when it has no id, otherwise updates the stored row.
    ///
    /// Returns the stored partner, including the id assigned on insert.
    /// Updating an id that does not exist fails with `NotFound`.
    async fn save_partner(&self, partner: &Partner) -> Result<Partner>;

    /// Deletes a partner and its contacts. Missing ids are not an error.
    async fn delete_partner_by_id(&self, id: PartnerId) -> Result<()>;

    /// Counts stored partners.
    async fn count_partners(&self) -> Result<u64>;
}

/// Repository for partner contact operations.
#[async_trait]
pub trait PartnerContactRepository: Send + Sync {
    /// Gets all contacts belonging to a partner, ordered by id.
    async fn find_contacts_by_partner_id(&self, partner_id: PartnerId)
        -> Result<Vec<PartnerContact>>;

    /// Gets a contact by its ID.
    async fn find_contact_by_id(&self, id: ContactId) -> Result<Option<PartnerContact>>;

    /// Inserts the contact when it has no id, otherwise updates the stored row.
    ///
    /// Fails with `InvalidData` when the owning partner does not exist.
    async fn save_contact(&self, contact: &PartnerContact) -> Result<PartnerContact>;

    /// Deletes a contact. Missing ids are not an error.
    async fn delete_contact_by_id(&self, id: ContactId) -> Result<()>;
}
