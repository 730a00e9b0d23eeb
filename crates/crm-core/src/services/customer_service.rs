// ============================================================================
// CRM Core - Customer Service
// File: crates/crm-core/src/services/customer_service.rs
// ============================================================================
//! Customer service enforcing email uniqueness and existence-before-mutate

use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

use crm_shared::utils::mask_email;

use crate::domain::{Customer, CustomerChanges, NewCustomer};
use crate::error::DomainError;
use crate::repositories::CustomerRepository;

/// Business rules on top of a [`CustomerRepository`].
///
/// The email checks below are read-then-write and can race; the unique
/// constraint in the store has the final word and surfaces as
/// [`DomainError::EmailAlreadyExists`] from the repository.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    customer_repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(customer_repo: Arc<R>) -> Self {
        Self { customer_repo }
    }

    /// Create a customer, rejecting emails already on file
    pub async fn create(&self, input: NewCustomer) -> Result<Customer, DomainError> {
        if self.customer_repo.get_customer_by_email(&input.email).await?.is_some() {
            warn!("Create rejected: email already exists: {}", mask_email(&input.email));
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let customer = self.customer_repo.create_customer(&input).await?;
        info!("Customer created: {}", customer.id);
        Ok(customer)
    }

    /// List every customer, or only those matching `search` when it is non-empty
    pub async fn find_all(&self, search: Option<&str>) -> Result<Vec<Customer>, DomainError> {
        match search {
            Some(term) if !term.is_empty() => self.customer_repo.search_customers(term).await,
            _ => self.customer_repo.get_all_customers().await,
        }
    }

    pub async fn find_one(&self, id: &Uuid) -> Result<Customer, DomainError> {
        self.customer_repo
            .get_customer_by_id(id)
            .await?
            .ok_or(DomainError::CustomerNotFound(*id))
    }

    /// Apply a partial update to an existing customer
    pub async fn update(&self, id: &Uuid, changes: CustomerChanges) -> Result<Customer, DomainError> {
        if self.customer_repo.get_customer_by_id(id).await?.is_none() {
            warn!("Update rejected: customer not found: {}", id);
            return Err(DomainError::CustomerNotFound(*id));
        }

        if let Some(email) = &changes.email {
            if let Some(owner) = self.customer_repo.get_customer_by_email(email).await? {
                if owner.id != *id {
                    warn!("Update rejected: email {} belongs to {}", mask_email(email), owner.id);
                    return Err(DomainError::EmailAlreadyExists(email.clone()));
                }
            }
        }

        let customer = self
            .customer_repo
            .update_customer(id, &changes)
            .await?
            .ok_or(DomainError::CustomerNotFound(*id))?;

        info!("Customer updated: {}", id);
        Ok(customer)
    }

    pub async fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        self.customer_repo
            .delete_customer(id)
            .await?
            .ok_or(DomainError::CustomerNotFound(*id))?;

        info!("Customer deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockCustomerRepository;
    use chrono::Utc;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn new_customer() -> NewCustomer {
        NewCustomer {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
            phone_number: "+1234567890".to_string(),
            address: Some("123 Main St".to_string()),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            country: Some("USA".to_string()),
        }
    }

    fn stored(input: NewCustomer) -> Customer {
        input.into_customer(Uuid::new_v4(), Utc::now())
    }

    fn service(repo: MockCustomerRepository) -> CustomerService<MockCustomerRepository> {
        CustomerService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_with_fresh_email() {
        let input = new_customer();
        let created = stored(input.clone());
        let email = input.email.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_email()
            .withf(move |e| e == email)
            .times(1)
            .returning(|_| Ok(None));
        let expected_input = input.clone();
        let returned = created.clone();
        repo.expect_create_customer()
            .withf(move |c| *c == expected_input)
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let result = service(repo).create(input).await.unwrap();
        assert_eq!(result, created);
    }

    #[tokio::test]
    async fn test_create_with_taken_email_does_not_insert() {
        let input = new_customer();
        let existing = stored(input.clone());

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create_customer().never();

        let err = service(repo).create(input).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_create_surfaces_storage_level_duplicate() {
        let input = new_customer();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_email().returning(|_| Ok(None));
        repo.expect_create_customer()
            .returning(|c| Err(DomainError::EmailAlreadyExists(c.email.clone())));

        let err = service(repo).create(input).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_find_all_without_search_lists_everything() {
        let customers = vec![stored(new_customer()), stored(new_customer())];
        let returned = customers.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_all_customers()
            .times(2)
            .returning(move || Ok(returned.clone()));
        repo.expect_search_customers().never();

        let service = service(repo);
        assert_eq!(service.find_all(None).await.unwrap(), customers);
        assert_eq!(service.find_all(Some("")).await.unwrap(), customers);
    }

    #[tokio::test]
    async fn test_find_all_with_search_delegates_to_search() {
        let customers = vec![stored(new_customer())];
        let returned = customers.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_search_customers()
            .withf(|term| term == "john")
            .times(1)
            .returning(move |_| Ok(returned.clone()));
        repo.expect_get_all_customers().never();

        assert_eq!(service(repo).find_all(Some("john")).await.unwrap(), customers);
    }

    #[tokio::test]
    async fn test_find_one() {
        let customer = stored(new_customer());
        let id = customer.id;
        let returned = customer.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .withf(move |i| *i == id)
            .returning(move |_| Ok(Some(returned.clone())));

        assert_eq!(service(repo).find_one(&id).await.unwrap(), customer);
    }

    #[tokio::test]
    async fn test_find_one_missing() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));

        let id = Uuid::new_v4();
        let err = service(repo).find_one(&id).await.unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));
        repo.expect_get_customer_by_email().never();
        repo.expect_update_customer().never();

        let changes = CustomerChanges {
            first_name: Some("Jane".to_string()),
            ..Default::default()
        };
        let err = service(repo).update(&Uuid::new_v4(), changes).await.unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_to_email_of_another_customer() {
        let customer = stored(new_customer());
        let other = stored(new_customer());
        let id = customer.id;
        let other_email = other.email.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .returning(move |_| Ok(Some(customer.clone())));
        repo.expect_get_customer_by_email()
            .returning(move |_| Ok(Some(other.clone())));
        repo.expect_update_customer().never();

        let changes = CustomerChanges {
            email: Some(other_email),
            ..Default::default()
        };
        let err = service(repo).update(&id, changes).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_keeping_own_email() {
        let customer = stored(new_customer());
        let id = customer.id;
        let own = customer.clone();
        let found = customer.clone();

        let mut updated = customer.clone();
        updated.last_name = "Smith".to_string();
        let returned = updated.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_get_customer_by_email()
            .returning(move |_| Ok(Some(own.clone())));
        repo.expect_update_customer()
            .withf(move |i, c| *i == id && c.last_name.as_deref() == Some("Smith"))
            .times(1)
            .returning(move |_, _| Ok(Some(returned.clone())));

        let changes = CustomerChanges {
            email: Some(customer.email.clone()),
            last_name: Some("Smith".to_string()),
            ..Default::default()
        };
        assert_eq!(service(repo).update(&id, changes).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_without_email_skips_uniqueness_lookup() {
        let customer = stored(new_customer());
        let id = customer.id;
        let found = customer.clone();
        let returned = customer.clone();

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_get_customer_by_email().never();
        repo.expect_update_customer()
            .returning(move |_, _| Ok(Some(returned.clone())));

        let changes = CustomerChanges {
            city: Some(None),
            ..Default::default()
        };
        assert!(service(repo).update(&id, changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_when_row_vanishes() {
        let customer = stored(new_customer());
        let id = customer.id;

        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .returning(move |_| Ok(Some(customer.clone())));
        repo.expect_update_customer().returning(|_, _| Ok(None));

        let changes = CustomerChanges {
            phone_number: Some("+1987654321".to_string()),
            ..Default::default()
        };
        let err = service(repo).update(&id, changes).await.unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(_)));
    }

    #[tokio::test]
    async fn test_remove() {
        let customer = stored(new_customer());
        let id = customer.id;

        let mut repo = MockCustomerRepository::new();
        repo.expect_delete_customer()
            .withf(move |i| *i == id)
            .times(1)
            .returning(move |_| Ok(Some(customer.clone())));

        assert!(service(repo).remove(&id).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_missing() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_delete_customer().returning(|_| Ok(None));

        let err = service(repo).remove(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::CustomerNotFound(_)));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_all_customers()
            .returning(|| Err(DomainError::DatabaseError("connection refused".to_string())));

        let err = service(repo).find_all(None).await.unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
