// ============================================================================
// CRM API - Customer DTOs
// File: crates/crm-api/src/dto/customer.rs
// ============================================================================
//! Customer request payloads and validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crm_core::domain::{CustomerChanges, NewCustomer};
use crm_shared::constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use crm_shared::utils::non_blank;

/// Digits with an optional leading `+`; spaces, dots, dashes and parentheses as separators.
static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().\-]*$").expect("phone number pattern is valid"));

fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();

    if !PHONE_NUMBER.is_match(value) || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(ValidationError::new("phone_number")
            .with_message("Phone number must be a valid phone number".into()));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("Must not be blank".into()));
    }
    Ok(())
}

/// Keeps an explicit `null` apart from an absent key.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn optional(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank).map(str::to_string)
}

/// Create customer payload - POST /api/customer
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCustomerRequest {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"), custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"), custom(function = "validate_not_blank"))]
    pub last_name: String,

    #[validate(email(message = "Email must be a valid email address"), length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"), custom(function = "validate_phone_number"))]
    pub phone_number: String,

    pub address: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            first_name: trimmed(request.first_name),
            last_name: trimmed(request.last_name),
            email: trimmed(request.email),
            phone_number: trimmed(request.phone_number),
            address: optional(request.address),
            city: optional(request.city),
            state: optional(request.state),
            country: optional(request.country),
        }
    }
}

/// Update customer payload - PUT/PATCH /api/customer/{id}
///
/// Every key is optional. `null` clears address, city, state and country;
/// on the required columns it means "leave unchanged".
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCustomerRequest {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"), custom(function = "validate_not_blank"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"), custom(function = "validate_not_blank"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Email must be a valid email address"), length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"), custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub address: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 100, message = "State must be at most 100 characters"))]
    pub state: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<Option<String>>,
}

impl From<UpdateCustomerRequest> for CustomerChanges {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerChanges {
            first_name: request.first_name.map(trimmed),
            last_name: request.last_name.map(trimmed),
            email: request.email.map(trimmed),
            phone_number: request.phone_number.map(trimmed),
            address: request.address.map(optional),
            city: request.city.map(optional),
            state: request.state.map(optional),
            country: request.country.map(optional),
        }
    }
}
