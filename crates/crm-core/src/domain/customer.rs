// ============================================================================
// CRM Core - Customer Entity
// File: crates/crm-core/src/domain/customer.rs
// Description: Customer entity, creation input and partial update set
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer entity as stored in the `customers` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Case-insensitive substring match over email, first name and last name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.email, &self.first_name, &self.last_name]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Fields of a customer about to be created. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl NewCustomer {
    /// Materializes the row the store would return for this input.
    pub fn into_customer(self, id: Uuid, created_at: DateTime<Utc>) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            created_at,
        }
    }
}

/// Partial update of a customer.
///
/// `None` leaves a column untouched. For the nullable columns `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub country: Option<Option<String>>,
}

impl CustomerChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
    }

    /// Applies the supplied fields to `customer`, leaving the rest as they are.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(first_name) = &self.first_name {
            customer.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            customer.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            customer.phone_number = phone_number.clone();
        }
        if let Some(address) = &self.address {
            customer.address = address.clone();
        }
        if let Some(city) = &self.city {
            customer.city = city.clone();
        }
        if let Some(state) = &self.state {
            customer.state = state.clone();
        }
        if let Some(country) = &self.country {
            customer.country = country.clone();
        }
    }
}
