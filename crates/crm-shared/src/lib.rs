//! # CRM Shared
//! 
//! Shared configuration, telemetry, constants and utilities for the CRM application.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
