use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON body extractor that reports every decoding failure as a validation error.
///
/// Unlike `axum::Json`, a request without a `content-type` header is still
/// parsed as JSON. An explicit non-JSON content type is rejected. Repeated
/// object keys keep their last value.
#[derive(Debug, Clone)]
pub struct ProfileJson<T>(pub T);

impl<T, S> FromRequest<S> for ProfileJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = declared_non_json(req.headers()) {
            return Err(ApiError::ContentType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await?;
        let document = serde_json::from_slice::<Value>(&bytes)?;
        let value = serde_json::from_value::<T>(document)?;

        Ok(Self(value))
    }
}

/// Returns the declared content type when it is present and not JSON.
fn declared_non_json(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(CONTENT_TYPE)?;
    let value = raw.to_str().unwrap_or("<non-utf8>");
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let is_json = essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"));

    (!is_json).then(|| value.to_string())
}
