//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation` so every malformed request gets
//! the same 422 JSON body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Integer record id taken from the path.
///
/// Integers outside the id column's range cannot name a stored row; they are
/// kept as text so the handler answers 404 rather than 422.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordId {
    Stored(i32),
    OutOfRange(String),
}

impl RecordId {
    pub fn parse(raw: String) -> Result<Self, ValidationError> {
        if let Ok(id) = raw.parse::<i32>() {
            return Ok(Self::Stored(id));
        }

        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::OutOfRange(raw));
        }

        Err(ValidationError::InvalidId { value: raw })
    }

    /// The stored id, or `NotFound` for an integer no row can carry.
    pub fn resolve(self, resource: &'static str) -> Result<i32, ApiError> {
        match self {
            Self::Stored(id) => Ok(id),
            Self::OutOfRange(id) => Err(ApiError::NotFound { resource, id }),
        }
    }
}

/// Extract and validate an integer record id from path
pub struct ValidId(pub RecordId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    ApiError::Validation(ValidationError::InvalidPath {
                        reason: rejection.body_text(),
                    })
                })?;

        Ok(Self(RecordId::parse(raw)?))
    }
}

/// JSON body whose parse failures become validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::Malformed {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    #[test]
    fn parses_in_range_ids() {
        assert_eq!(RecordId::parse("42".into()), Ok(RecordId::Stored(42)));
        assert_eq!(RecordId::parse("-1".into()), Ok(RecordId::Stored(-1)));
    }

    #[test]
    fn oversized_integers_are_out_of_range() {
        assert_eq!(
            RecordId::parse("9999999999".into()),
            Ok(RecordId::OutOfRange("9999999999".into()))
        );
        assert_eq!(
            RecordId::parse("-99999999999999999999999".into()),
            Ok(RecordId::OutOfRange("-99999999999999999999999".into()))
        );
    }

    #[test]
    fn non_numeric_ids_are_invalid() {
        for raw in ["abc", "", "-", "12a", "1.5"] {
            assert!(
                matches!(RecordId::parse(raw.into()), Err(ValidationError::InvalidId { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn out_of_range_resolves_to_not_found() {
        let err = RecordId::OutOfRange("9999999999".into())
            .resolve("Department")
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_path_param_reports_path_error() {
        async fn handler(ValidId(_): ValidId) {}
        let app: Router = Router::new().route("/no-params", get(handler));

        let response = app
            .oneshot(Request::builder().uri("/no-params").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("invalid path:"), "{message}");
        assert!(!message.contains("cannot be empty"));
    }
}
