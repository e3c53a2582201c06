//! # API REST
//!
//! REST API for the address book lookup collaborator.
//!
//! Handles:
//! - `GET /lookup` and `GET /health` with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS)
//!
//! Validation and address data come from `addressbook-core`.

#![warn(rust_2018_idioms)]

use addressbook_core::constants::LOOKUP_PATH;
use addressbook_core::generator::generate_addresses;
use addressbook_core::{CoreConfig, LookupError, validate_lookup};
use api_shared::{Address, HealthRes, HealthService, LookupParams, LookupRes};
use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode, header},
    response::Json,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, lookup),
    components(schemas(HealthRes, LookupRes, Address))
)]
pub struct ApiDoc;

/// Builds the REST router.
///
/// Cross-origin `GET` and `POST` requests carrying `Content-Type` are permitted from any
/// origin.
pub fn router(cfg: Arc<CoreConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route(LOOKUP_PATH, get(lookup))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(AppState { cfg })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/lookup",
    params(LookupParams),
    responses(
        (status = 200, description = "Matching addresses", body = LookupRes),
        (status = 400, description = "Missing, non-numeric or too short parameter", body = LookupRes),
        (status = 404, description = "No results found", body = LookupRes)
    )
)]
/// Look up addresses by postcode and street number
///
/// Parameters are validated postcode first, then street number; the first failing rule is
/// reported. Matches are returned after the configured artificial delay. Repeated
/// parameters are joined with `,` and an undecodable query reads as empty, so every reply
/// carries a lookup envelope.
///
/// # Errors
/// - `400 Bad Request` if a parameter is missing, not all digits, or the postcode is
///   shorter than 4 digits.
/// - `404 Not Found` if no address matches.
#[axum::debug_handler]
async fn lookup(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> (StatusCode, Json<LookupRes>) {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(%rejection, "undecodable lookup query, treating as empty");
            Vec::new()
        }
    };
    let params = LookupParams::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let postcode = params.postcode.unwrap_or_default();
    let street_number = params.streetnumber.unwrap_or_default();

    if let Err(err) = validate_lookup(Some(&postcode), Some(&street_number)) {
        tracing::warn!(%err, "lookup request rejected");
        return (StatusCode::BAD_REQUEST, Json(LookupRes::error(err.to_string())));
    }

    match generate_addresses(&postcode, &street_number) {
        Some(details) => {
            tokio::time::sleep(state.cfg.lookup_delay()).await;
            tracing::info!(
                %postcode,
                %street_number,
                results = details.len(),
                "lookup matched"
            );
            (StatusCode::OK, Json(LookupRes::Ok { details }))
        }
        None => {
            tracing::info!(%postcode, %street_number, "lookup found no results");
            (
                StatusCode::NOT_FOUND,
                Json(LookupRes::error(LookupError::NotFound.to_string())),
            )
        }
    }
}
