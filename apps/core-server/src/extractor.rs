use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use headers::Authorization;
use headers::authorization::Bearer;
use serde_qs::Config;

use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::ErrorResponse;

/// Query string extractor accepting nested and repeated keys
pub struct Qs<T>(pub T);

impl<S, T> FromRequestParts<S> for Qs<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = ErrorResponseRestDTO;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        Config::new(2, false)
            .deserialize_str(query)
            .map(Self)
            .map_err(|e| {
                ErrorResponseRestDTO::input_validation(format!("Query extraction error: {e}"))
            })
    }
}

/// Capability token presented by a counterparty as `Authorization: Bearer <token>`
pub struct CapabilityToken(pub String);

impl<S> FromRequestParts<S> for CapabilityToken
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    tracing::warn!(reason = ?rejection.reason(), "Missing capability token");
                    ErrorResponse::Unauthorized
                })?;

        Ok(Self(bearer.token().to_owned()))
    }
}
