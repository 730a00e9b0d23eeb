use axum::{routing::get, routing::post, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crm_shared::constants::API_PREFIX;

use crate::handlers::{customer, health};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let customer_routes = Router::new()
        .route(
            "/customer",
            post(customer::create_customer).get(customer::list_customers),
        )
        .route(
            "/customer/{id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .patch(customer::update_customer)
                .delete(customer::delete_customer),
        );

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // Customer routes
        .nest(API_PREFIX, customer_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
