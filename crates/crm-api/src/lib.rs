//! # CRM API
//! 
//! HTTP handlers, extractors, DTOs, and validators.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
