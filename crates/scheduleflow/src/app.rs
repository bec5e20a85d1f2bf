use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contacts::{create_contact, delete_contact, list_contacts, update_contact},
        health::{livez, readyz},
        partners::{
            create_partner, delete_partner, get_partner, list_partners, search_partners,
            update_partner,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // `/partners/search` is a static segment and wins over `{id}`.
    let partner_routes = Router::new()
        .route(
            "/partners",
            get(list_partners).post(create_partner).put(update_partner),
        )
        .route("/partners/search", get(search_partners))
        .route("/partners/{id}", get(get_partner).delete(delete_partner))
        .route(
            "/partners/{partner_id}/contacts",
            get(list_contacts)
                .post(create_contact)
                .put(update_contact),
        )
        .route(
            "/partners/{partner_id}/contacts/{id}",
            delete(delete_contact),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(partner_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
