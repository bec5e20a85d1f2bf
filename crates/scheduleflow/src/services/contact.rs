use std::sync::Arc;

use scheduleflow_core::partner::{
    require_id, require_request, validate_contact_request, ContactId, PartnerContactRequest,
    PartnerContactResponse, PartnerId,
};
use scheduleflow_core::storage::{PartnerContactRepository, PartnerRepository};

use super::ServiceError;

/// Contact use-cases, scoped to the partner named in the route.
#[derive(Clone)]
pub struct PartnerContactService {
    partners: Arc<dyn PartnerRepository>,
    contacts: Arc<dyn PartnerContactRepository>,
}

impl PartnerContactService {
    pub fn new(
        partners: Arc<dyn PartnerRepository>,
        contacts: Arc<dyn PartnerContactRepository>,
    ) -> Self {
        Self { partners, contacts }
    }

    /// Lists a partner's contacts in id order. Unknown partners have none.
    pub async fn select_partner_contact_by_partner_id(
        &self,
        partner_id: PartnerId,
    ) -> Result<Vec<PartnerContactResponse>, ServiceError> {
        let contacts = self.contacts.find_contacts_by_partner_id(partner_id).await?;
        Ok(contacts
            .into_iter()
            .map(PartnerContactResponse::from)
            .collect())
    }

    /// Creates a contact under `partner_id`, which must exist.
    pub async fn create_partner_contact(
        &self,
        partner_id: PartnerId,
        request: Option<PartnerContactRequest>,
    ) -> Result<PartnerContactResponse, ServiceError> {
        let request = require_request(request, "PartnerContactRequest")?;
        validate_contact_request(&request)?;
        self.ensure_partner_exists(partner_id).await?;

        let saved = self
            .contacts
            .save_contact(&request.into_contact(partner_id))
            .await?;
        tracing::info!(partner_id, contact_id = ?saved.id, "Created partner contact");

        Ok(saved.into())
    }

    /// Replaces a contact's fields. The contact must belong to `partner_id`.
    ///
    /// The partner check and the save are separate repository calls. If the
    /// partner is deleted in between, the save fails with `InvalidData` (400,
    /// a foreign key violation in SQLite) rather than a 404.
    pub async fn update_partner_contact(
        &self,
        partner_id: PartnerId,
        request: Option<PartnerContactRequest>,
    ) -> Result<PartnerContactResponse, ServiceError> {
        let request = require_request(request, "PartnerContactRequest")?;
        validate_contact_request(&request)?;
        let id = require_id(request.id, "PartnerContact")?;
        self.ensure_partner_exists(partner_id).await?;

        let mut contact = self
            .contacts
            .find_contact_by_id(id)
            .await?
            .filter(|c| c.partner_id == partner_id)
            .ok_or_else(|| ServiceError::not_found("PartnerContact", id))?;

        request.apply_to(&mut contact);
        let saved = self.contacts.save_contact(&contact).await?;
        tracing::info!(partner_id, contact_id = id, "Updated partner contact");

        Ok(saved.into())
    }

    /// Deletes a contact of `partner_id`. Missing contacts and contacts of
    /// other partners are left alone.
    pub async fn delete_partner_contact_by_id(
        &self,
        partner_id: PartnerId,
        id: ContactId,
    ) -> Result<(), ServiceError> {
        match self.contacts.find_contact_by_id(id).await? {
            Some(contact) if contact.partner_id == partner_id => {
                self.contacts.delete_contact_by_id(id).await?;
                tracing::info!(partner_id, contact_id = id, "Deleted partner contact");
            }
            Some(contact) => {
                tracing::debug!(
                    partner_id,
                    contact_id = id,
                    owner_id = contact.partner_id,
                    "Contact belongs to another partner, not deleting"
                );
            }
            None => {}
        }
        Ok(())
    }

    async fn ensure_partner_exists(&self, partner_id: PartnerId) -> Result<(), ServiceError> {
        match self.partners.find_partner_by_id(partner_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Partner", partner_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scheduleflow_core::partner::{Partner, ValidationError};

    use crate::storage::InMemoryRepository;

    async fn service_with_partners(names: &[&str]) -> PartnerContactService {
        let repo = Arc::new(InMemoryRepository::new());
        for name in names {
            repo.save_partner(&Partner::new(*name)).await.unwrap();
        }
        PartnerContactService::new(repo.clone(), repo)
    }

    #[tokio::test]
    async fn test_create_contact_for_partner() {
        let service = service_with_partners(&["Acme"]).await;
        let request = PartnerContactRequest::new("Kim")
            .with_position("Manager")
            .with_email("kim@acme.test");

        let created = service.create_partner_contact(1, Some(request)).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.partner_id, 1);
        assert_eq!(created.name, "Kim");
        assert_eq!(created.position.as_deref(), Some("Manager"));
    }

    #[tokio::test]
    async fn test_create_contact_rejects_null_and_blank() {
        let service = service_with_partners(&["Acme"]).await;

        assert_eq!(
            service.create_partner_contact(1, None).await,
            Err(ServiceError::Validation(ValidationError::NullRequest {
                request: "PartnerContactRequest"
            }))
        );
        assert_eq!(
            service
                .create_partner_contact(1, Some(PartnerContactRequest::new("")))
                .await,
            Err(ServiceError::Validation(
                ValidationError::MissingRequiredField { field: "name" }
            ))
        );
        assert!(service
            .select_partner_contact_by_partner_id(1)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_contact_for_missing_partner_is_not_found() {
        let service = service_with_partners(&[]).await;

        let result = service
            .create_partner_contact(5, Some(PartnerContactRequest::new("Kim")))
            .await;

        assert_eq!(result, Err(ServiceError::not_found("Partner", 5)));
    }

    #[tokio::test]
    async fn test_select_returns_only_that_partners_contacts() {
        let service = service_with_partners(&["Acme", "Globex"]).await;
        for (partner_id, name) in [(1, "Kim"), (2, "Lee"), (1, "Park")] {
            service
                .create_partner_contact(partner_id, Some(PartnerContactRequest::new(name)))
                .await
                .unwrap();
        }

        let contacts = service.select_partner_contact_by_partner_id(1).await.unwrap();

        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Kim", "Park"]);
        assert!(contacts.iter().all(|c| c.partner_id == 1));
    }

    #[tokio::test]
    async fn test_update_contact_requires_id() {
        let service = service_with_partners(&["Acme"]).await;

        let result = service
            .update_partner_contact(1, Some(PartnerContactRequest::new("Kim")))
            .await;

        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingId {
                entity: "PartnerContact"
            }))
        );
    }

    #[tokio::test]
    async fn test_update_contact_under_wrong_partner_is_not_found() {
        let service = service_with_partners(&["Acme", "Globex"]).await;
        service
            .create_partner_contact(1, Some(PartnerContactRequest::new("Kim")))
            .await
            .unwrap();

        let result = service
            .update_partner_contact(2, Some(PartnerContactRequest::new("Kim").with_id(1)))
            .await;

        assert_eq!(result, Err(ServiceError::not_found("PartnerContact", 1)));
    }

    #[tokio::test]
    async fn test_update_contact_replaces_fields() {
        let service = service_with_partners(&["Acme"]).await;
        service
            .create_partner_contact(
                1,
                Some(PartnerContactRequest::new("Kim").with_phone("010-1234-5678")),
            )
            .await
            .unwrap();

        let updated = service
            .update_partner_contact(
                1,
                Some(
                    PartnerContactRequest::new("Kim Minji")
                        .with_id(1)
                        .with_department("Sales"),
                ),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Kim Minji");
        assert_eq!(updated.department.as_deref(), Some("Sales"));
        assert_eq!(updated.phone, None);
        assert_eq!(updated.partner_id, 1);
    }

    #[tokio::test]
    async fn test_delete_contact_is_idempotent() {
        let service = service_with_partners(&["Acme"]).await;
        service
            .create_partner_contact(1, Some(PartnerContactRequest::new("Kim")))
            .await
            .unwrap();

        service.delete_partner_contact_by_id(1, 1).await.unwrap();
        service.delete_partner_contact_by_id(1, 1).await.unwrap();

        assert!(service
            .select_partner_contact_by_partner_id(1)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_contact_of_other_partner_is_ignored() {
        let service = service_with_partners(&["Acme", "Globex"]).await;
        service
            .create_partner_contact(1, Some(PartnerContactRequest::new("Kim")))
            .await
            .unwrap();

        service.delete_partner_contact_by_id(2, 1).await.unwrap();

        assert_eq!(
            service
                .select_partner_contact_by_partner_id(1)
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
