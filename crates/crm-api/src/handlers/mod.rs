//! HTTP handlers

pub mod customer;
pub mod health;
