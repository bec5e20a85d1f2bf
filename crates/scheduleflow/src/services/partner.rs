use std::sync::Arc;

use scheduleflow_core::partner::{
    require_id, require_request, validate_partner_request, PartnerId, PartnerRequest,
    PartnerResponse,
};
use scheduleflow_core::storage::PartnerRepository;

use super::ServiceError;

/// Partner use-cases over a [`PartnerRepository`].
#[derive(Clone)]
pub struct PartnerService {
    repo: Arc<dyn PartnerRepository>,
}

impl PartnerService {
    pub fn new(repo: Arc<dyn PartnerRepository>) -> Self {
        Self { repo }
    }

    /// Lists every partner in id order.
    pub async fn find_all(&self) -> Result<Vec<PartnerResponse>, ServiceError> {
        let partners = self.repo.find_all_partners().await?;
        Ok(partners.into_iter().map(PartnerResponse::from).collect())
    }

    pub async fn select_partner_by_id(
        &self,
        id: PartnerId,
    ) -> Result<Option<PartnerResponse>, ServiceError> {
        let partner = self.repo.find_partner_by_id(id).await?;
        Ok(partner.map(PartnerResponse::from))
    }

    /// Case-sensitive substring search on the company name.
    ///
    /// No name means no results, while an empty name matches everything.
    pub async fn select_partner_by_name_contains(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<PartnerResponse>, ServiceError> {
        let Some(name) = name else {
            return Ok(Vec::new());
        };

        let partners = self.repo.find_partners_by_name_contains(name).await?;
        Ok(partners.into_iter().map(PartnerResponse::from).collect())
    }

    /// Creates a partner. Any id in the request is ignored.
    pub async fn create_partner(
        &self,
        request: Option<PartnerRequest>,
    ) -> Result<PartnerResponse, ServiceError> {
        let request = require_request(request, "PartnerRequest")?;
        validate_partner_request(&request)?;

        let saved = self.repo.save_partner(&request.into_partner()).await?;
        tracing::info!(partner_id = ?saved.id, company_name = %saved.company_name, "Created partner");

        Ok(saved.into())
    }

    /// Replaces an existing partner's fields. The request must carry the id.
    pub async fn update_partner(
        &self,
        request: Option<PartnerRequest>,
    ) -> Result<PartnerResponse, ServiceError> {
        let request = require_request(request, "PartnerRequest")?;
        validate_partner_request(&request)?;
        let id = require_id(request.id, "Partner")?;

        let mut partner = self
            .repo
            .find_partner_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Partner", id))?;

        request.apply_to(&mut partner);
        let saved = self.repo.save_partner(&partner).await?;
        tracing::info!(partner_id = id, "Updated partner");

        Ok(saved.into())
    }

    /// Deletes a partner and its contacts. Unknown ids are ignored.
    pub async fn delete_partner_by_id(&self, id: PartnerId) -> Result<(), ServiceError> {
        self.repo.delete_partner_by_id(id).await?;
        tracing::info!(partner_id = id, "Deleted partner");
        Ok(())
    }

    /// Number of stored partners; doubles as the readiness check.
    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.repo.count_partners().await?)
    }
}
