// ============================================================================
// CRM API - Customer Handlers
// File: crates/crm-api/src/handlers/customer.rs
// ============================================================================
//! Customer CRUD HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use crm_core::domain::Customer;

use crate::dto::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::error::ApiError;
use crate::extract::{CustomerId, SearchQuery, ValidatedJson};
use crate::state::AppState;

/// Create handler - POST /api/customer
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.customers.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// List handler - GET /api/customer?search=
pub async fn list_customers(
    State(state): State<AppState>,
    query: SearchQuery,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.customers.find_all(query.search.as_deref()).await?;
    info!("Listed {} customers", customers.len());
    Ok(Json(customers))
}

/// Fetch handler - GET /api/customer/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.find_one(&id).await?))
}

/// Update handler - PUT or PATCH /api/customer/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.update(&id, payload.into()).await?))
}

/// Delete handler - DELETE /api/customer/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<StatusCode, ApiError> {
    state.customers.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
