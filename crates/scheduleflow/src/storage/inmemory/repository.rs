//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scheduleflow_core::partner::{ContactId, Partner, PartnerContact, PartnerId};
use scheduleflow_core::storage::{
    PartnerContactRepository, PartnerRepository, RepositoryError, Result,
};

/// Rows plus the id sequences, guarded by one lock so that a partner delete
/// and its contact cascade happen together.
#[derive(Debug)]
struct Tables {
    partners: BTreeMap<PartnerId, Partner>,
    contacts: BTreeMap<ContactId, PartnerContact>,
    next_partner_id: PartnerId,
    next_contact_id: ContactId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            partners: BTreeMap::new(),
            contacts: BTreeMap::new(),
            next_partner_id: 1,
            next_contact_id: 1,
        }
    }
}

/// In-memory storage backend.
///
/// Uses BTreeMaps wrapped in `Arc<RwLock<_>>` for thread-safe access, keyed by
/// id so listings come back in id order. Data is not persisted and will be
/// lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartnerRepository for InMemoryRepository {
    async fn find_all_partners(&self) -> Result<Vec<Partner>> {
        let tables = self.tables.read().await;
        Ok(tables.partners.values().cloned().collect())
    }

    async fn find_partner_by_id(&self, id: PartnerId) -> Result<Option<Partner>> {
        let tables = self.tables.read().await;
        Ok(tables.partners.get(&id).cloned())
    }

    async fn find_partners_by_name_contains(&self, name: &str) -> Result<Vec<Partner>> {
        let tables = self.tables.read().await;
        Ok(tables
            .partners
            .values()
            .filter(|p| p.company_name.contains(name))
            .cloned()
            .collect())
    }

    async fn save_partner(&self, partner: &Partner) -> Result<Partner> {
        let mut tables = self.tables.write().await;
        let mut saved = partner.clone();

        match partner.id {
            None => {
                let id = tables.next_partner_id;
                tables.next_partner_id += 1;
                saved.id = Some(id);
                tables.partners.insert(id, saved.clone());
            }
            Some(id) => {
                let Some(existing) = tables.partners.get_mut(&id) else {
                    return Err(RepositoryError::not_found("Partner", id));
                };
                // created_at is owned by the stored row.
                saved.created_at = existing.created_at;
                *existing = saved.clone();
            }
        }

        Ok(saved)
    }

    async fn delete_partner_by_id(&self, id: PartnerId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.partners.remove(&id).is_some() {
            tables.contacts.retain(|_, c| c.partner_id != id);
        }
        Ok(())
    }

    async fn count_partners(&self) -> Result<u64> {
        let tables = self.tables.read().await;
        Ok(tables.partners.len() as u64)
    }
}

#[async_trait]
impl PartnerContactRepository for InMemoryRepository {
    async fn find_contacts_by_partner_id(
        &self,
        partner_id: PartnerId,
    ) -> Result<Vec<PartnerContact>> {
        let tables = self.tables.read().await;
        Ok(tables
            .contacts
            .values()
            .filter(|c| c.partner_id == partner_id)
            .cloned()
            .collect())
    }

    async fn find_contact_by_id(&self, id: ContactId) -> Result<Option<PartnerContact>> {
        let tables = self.tables.read().await;
        Ok(tables.contacts.get(&id).cloned())
    }

    async fn save_contact(&self, contact: &PartnerContact) -> Result<PartnerContact> {
        let mut tables = self.tables.write().await;

        if !tables.partners.contains_key(&contact.partner_id) {
            return Err(RepositoryError::InvalidData(format!(
                "Partner {} does not exist",
                contact.partner_id
            )));
        }

        let mut saved = contact.clone();
        match contact.id {
            None => {
                let id = tables.next_contact_id;
                tables.next_contact_id += 1;
                saved.id = Some(id);
                tables.contacts.insert(id, saved.clone());
            }
            Some(id) => {
                let Some(existing) = tables.contacts.get_mut(&id) else {
                    return Err(RepositoryError::not_found("PartnerContact", id));
                };
                saved.created_at = existing.created_at;
                *existing = saved.clone();
            }
        }

        Ok(saved)
    }

    async fn delete_contact_by_id(&self, id: ContactId) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.contacts.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo_with_partner(name: &str) -> (InMemoryRepository, PartnerId) {
        let repo = InMemoryRepository::new();
        let partner = repo.save_partner(&Partner::new(name)).await.unwrap();
        (repo, partner.id.unwrap())
    }

    // ==================== Partner CRUD Tests ====================

    #[tokio::test]
    async fn test_partner_save_and_get() {
        let repo = InMemoryRepository::new();
        let partner = Partner::new("Acme").with_description("supplier");

        let saved = repo.save_partner(&partner).await.unwrap();

        assert_eq!(saved.id, Some(1));
        let retrieved = repo.find_partner_by_id(1).await.unwrap();
        assert_eq!(retrieved, Some(saved));
    }

    #[tokio::test]
    async fn test_partner_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let first = repo.save_partner(&Partner::new("A")).await.unwrap();
        repo.delete_partner_by_id(first.id.unwrap()).await.unwrap();

        let second = repo.save_partner(&Partner::new("B")).await.unwrap();

        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_partner_get_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.find_partner_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_partner_update_keeps_created_at() {
        let (repo, id) = repo_with_partner("Acme").await;
        let original = repo.find_partner_by_id(id).await.unwrap().unwrap();

        let mut changed = Partner::new("Acme Corp").with_id(id);
        changed.created_at = chrono::Utc::now() + chrono::Duration::days(1);
        let updated = repo.save_partner(&changed).await.unwrap();

        assert_eq!(updated.company_name, "Acme Corp");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(repo.count_partners().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_partner_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.save_partner(&Partner::new("Ghost").with_id(5)).await;
        assert_eq!(result, Err(RepositoryError::not_found("Partner", 5)));
    }

    #[tokio::test]
    async fn test_partner_search_is_case_sensitive() {
        let repo = InMemoryRepository::new();
        for name in ["Apple", "Application", "Banana", "pineapple"] {
            repo.save_partner(&Partner::new(name)).await.unwrap();
        }

        let found = repo.find_partners_by_name_contains("App").await.unwrap();
        let names: Vec<_> = found.iter().map(|p| p.company_name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Application"]);

        let all = repo.find_partners_by_name_contains("").await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_partner_delete_nonexistent_is_ok() {
        let repo = InMemoryRepository::new();
        assert!(repo.delete_partner_by_id(99).await.is_ok());
    }

    // ==================== Contact CRUD Tests ====================

    #[tokio::test]
    async fn test_contact_save_and_list_by_partner() {
        let (repo, acme) = repo_with_partner("Acme").await;
        let globex = repo
            .save_partner(&Partner::new("Globex"))
            .await
            .unwrap()
            .id
            .unwrap();

        repo.save_contact(&PartnerContact::new(acme, "Kim"))
            .await
            .unwrap();
        repo.save_contact(&PartnerContact::new(globex, "Lee"))
            .await
            .unwrap();
        repo.save_contact(&PartnerContact::new(acme, "Park"))
            .await
            .unwrap();

        let contacts = repo.find_contacts_by_partner_id(acme).await.unwrap();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Kim", "Park"]);
    }

    #[tokio::test]
    async fn test_contact_requires_existing_partner() {
        let repo = InMemoryRepository::new();
        let result = repo.save_contact(&PartnerContact::new(3, "Orphan")).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_contact_update_nonexistent() {
        let (repo, partner_id) = repo_with_partner("Acme").await;
        let result = repo
            .save_contact(&PartnerContact::new(partner_id, "Kim").with_id(40))
            .await;
        assert_eq!(result, Err(RepositoryError::not_found("PartnerContact", 40)));
    }

    #[tokio::test]
    async fn test_partner_delete_cascades_to_contacts() {
        let (repo, partner_id) = repo_with_partner("Acme").await;
        let contact = repo
            .save_contact(&PartnerContact::new(partner_id, "Kim"))
            .await
            .unwrap();

        repo.delete_partner_by_id(partner_id).await.unwrap();

        assert!(repo
            .find_contact_by_id(contact.id.unwrap())
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_contacts_by_partner_id(partner_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_contact_delete_is_idempotent() {
        let (repo, partner_id) = repo_with_partner("Acme").await;
        let contact = repo
            .save_contact(&PartnerContact::new(partner_id, "Kim"))
            .await
            .unwrap();
        let id = contact.id.unwrap();

        repo.delete_contact_by_id(id).await.unwrap();
        repo.delete_contact_by_id(id).await.unwrap();

        assert!(repo.find_contact_by_id(id).await.unwrap().is_none());
    }

    // ==================== Concurrency Tests ====================

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save_partner(&Partner::new(format!("Partner {i}")))
                        .await
                        .unwrap()
                        .id
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 16);
        assert_eq!(repo.count_partners().await.unwrap(), 16);
    }
}
