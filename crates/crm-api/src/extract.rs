//! Request extractors that reject with [`ApiError`] instead of axum's plain-text rejections

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and passed its `validator` rules.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// The `{id}` path segment parsed as a customer UUID.
#[derive(Debug, Clone, Copy)]
pub struct CustomerId(pub Uuid);

impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Uuid::parse_str(&raw)
            .map(CustomerId)
            .map_err(|_| ApiError::BadRequest(format!("Invalid customer id: {}", raw)))
    }
}

/// Query string of GET /api/customer. Only `search` is read; when the key is
/// repeated the first value wins and other keys are ignored.
#[derive(Debug, Default)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Ok(SearchQuery { search })
    }
}
