//! Partner contact handlers, nested under `/partners/{partner_id}/contacts`.

use axum::{
    extract::State,
    Json,
};

use scheduleflow_core::partner::{
    ContactId, PartnerContactRequest, PartnerContactResponse, PartnerId,
};

use super::extract::{OptionalJson, PathParams};
use crate::{handlers::AppError, state::AppState};

/// List a partner's contacts (GET /partners/{partner_id}/contacts).
pub async fn list_contacts(
    State(state): State<AppState>,
    PathParams(partner_id): PathParams<PartnerId>,
) -> Result<Json<Vec<PartnerContactResponse>>, AppError> {
    let contacts = state
        .contacts
        .select_partner_contact_by_partner_id(partner_id)
        .await?;
    Ok(Json(contacts))
}

/// Create a contact (POST /partners/{partner_id}/contacts).
pub async fn create_contact(
    State(state): State<AppState>,
    PathParams(partner_id): PathParams<PartnerId>,
    OptionalJson(request): OptionalJson<PartnerContactRequest>,
) -> Result<Json<PartnerContactResponse>, AppError> {
    let contact = state
        .contacts
        .create_partner_contact(partner_id, request)
        .await?;
    Ok(Json(contact))
}

/// Update a contact (PUT /partners/{partner_id}/contacts).
pub async fn update_contact(
    State(state): State<AppState>,
    PathParams(partner_id): PathParams<PartnerId>,
    OptionalJson(request): OptionalJson<PartnerContactRequest>,
) -> Result<Json<PartnerContactResponse>, AppError> {
    let contact = state
        .contacts
        .update_partner_contact(partner_id, request)
        .await?;
    Ok(Json(contact))
}

/// Delete a contact (DELETE /partners/{partner_id}/contacts/{id}).
pub async fn delete_contact(
    State(state): State<AppState>,
    PathParams((partner_id, id)): PathParams<(PartnerId, ContactId)>,
) -> Result<(), AppError> {
    state
        .contacts
        .delete_partner_contact_by_id(partner_id, id)
        .await?;
    Ok(())
}
