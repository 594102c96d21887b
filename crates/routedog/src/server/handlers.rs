//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use routedog_core::{
    Address, GeocodeAddressRequest, ParseAddressesRequest, ParseAddressesResponse,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::AppState;

/// Liveness payload for `GET /` and `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// `GET /` and `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        message: "Route.dog API is running".to_string(),
    })
}

/// `POST /v1/addresses`: extract addresses from an image and geocode them.
pub async fn parse_addresses(
    State(service): State<AppState>,
    payload: Result<Json<ParseAddressesRequest>, JsonRejection>,
) -> Result<Json<ParseAddressesResponse>, ApiError> {
    let Json(request) = payload?;
    let addresses = service.parse_addresses(&request.image).await?;
    Ok(Json(ParseAddressesResponse { addresses }))
}

/// `PUT /v1/geocode-address`: geocode a single address.
pub async fn geocode_address(
    State(service): State<AppState>,
    payload: Result<Json<GeocodeAddressRequest>, JsonRejection>,
) -> Result<Json<Address>, ApiError> {
    let Json(request) = payload?;
    let address = service.geocode_address(&request.address).await?;
    Ok(Json(address))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
