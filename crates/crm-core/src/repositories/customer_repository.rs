//! Customer repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Customer, CustomerChanges, NewCustomer};
use crate::error::DomainError;

/// Data access for the `customers` table. Every method is a single statement;
/// absence is reported as `None`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;
    async fn get_all_customers(&self) -> Result<Vec<Customer>, DomainError>;
    async fn get_customer_by_id(&self, id: &Uuid) -> Result<Option<Customer>, DomainError>;
    async fn get_customer_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
    /// Blank terms yield an empty list without reaching the store.
    async fn search_customers(&self, term: &str) -> Result<Vec<Customer>, DomainError>;
    async fn update_customer(&self, id: &Uuid, changes: &CustomerChanges) -> Result<Option<Customer>, DomainError>;
    async fn delete_customer(&self, id: &Uuid) -> Result<Option<Customer>, DomainError>;
}
