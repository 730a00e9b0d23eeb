//! # CRM Core - Domain Module
//! 
//! Domain entities for the CRM application.

pub mod customer;

pub use customer::{Customer, CustomerChanges, NewCustomer};
