//! Partner CRUD handlers.

use axum::{
    extract::State,
    Json,
};

use scheduleflow_core::partner::{
    PartnerId, PartnerRequest, PartnerResponse, SearchPartnersQuery,
};

use super::extract::{OptionalJson, PathParams, QueryParams};
use crate::{handlers::AppError, state::AppState};

/// List all partners (GET /partners).
pub async fn list_partners(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartnerResponse>>, AppError> {
    let partners = state.partners.find_all().await?;
    Ok(Json(partners))
}

/// Search partners by company name (GET /partners/search?name=).
pub async fn search_partners(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchPartnersQuery>,
) -> Result<Json<Vec<PartnerResponse>>, AppError> {
    let partners = state
        .partners
        .select_partner_by_name_contains(query.name.as_deref())
        .await?;
    Ok(Json(partners))
}

/// Get a single partner (GET /partners/{id}). Unknown ids answer `null`.
pub async fn get_partner(
    State(state): State<AppState>,
    PathParams(id): PathParams<PartnerId>,
) -> Result<Json<Option<PartnerResponse>>, AppError> {
    let partner = state.partners.select_partner_by_id(id).await?;
    Ok(Json(partner))
}

/// Create a new partner (POST /partners).
pub async fn create_partner(
    State(state): State<AppState>,
    OptionalJson(request): OptionalJson<PartnerRequest>,
) -> Result<Json<PartnerResponse>, AppError> {
    let partner = state.partners.create_partner(request).await?;
    Ok(Json(partner))
}

/// Update a partner (PUT /partners). The id travels in the body.
pub async fn update_partner(
    State(state): State<AppState>,
    OptionalJson(request): OptionalJson<PartnerRequest>,
) -> Result<Json<PartnerResponse>, AppError> {
    let partner = state.partners.update_partner(request).await?;
    Ok(Json(partner))
}

/// Delete a partner and its contacts (DELETE /partners/{id}).
pub async fn delete_partner(
    State(state): State<AppState>,
    PathParams(id): PathParams<PartnerId>,
) -> Result<(), AppError> {
    state.partners.delete_partner_by_id(id).await?;
    Ok(())
}
