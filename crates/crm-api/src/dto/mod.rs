//! Request DTOs and their validation rules

pub mod customer;

pub use customer::{CreateCustomerRequest, UpdateCustomerRequest};
