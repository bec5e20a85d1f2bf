//! Request extraction.
//!
//! Wrappers around axum's extractors whose rejections render as the JSON
//! error envelope instead of axum's plain-text default.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::AppError;

/// Request that could not be turned into handler arguments. Always a 400.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read request body: {0}")]
    Read(String),
    #[error("Malformed JSON request: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

/// `axum::extract::Path` with envelope rejections.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| RequestError::InvalidPath(e.body_text()))?;
        Ok(Self(value))
    }
}

/// `axum::extract::Query` with envelope rejections.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| RequestError::InvalidQuery(e.body_text()))?;
        Ok(Self(value))
    }
}

/// JSON body that may be absent.
///
/// An empty body and a literal `null` both extract as `None`, so the service
/// decides how to treat a missing request. Unlike `axum::Json`, the
/// `Content-Type` header is not checked.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::Read(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let value = serde_json::from_slice::<Option<T>>(&bytes).map_err(RequestError::from)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use scheduleflow_core::partner::PartnerRequest;

    async fn extract(body: &'static str) -> Result<Option<PartnerRequest>, AppError> {
        let req = Request::builder()
            .method("POST")
            .uri("/partners")
            .body(Body::from(body))
            .unwrap();
        OptionalJson::<PartnerRequest>::from_request(req, &())
            .await
            .map(|OptionalJson(value)| value)
    }

    #[tokio::test]
    async fn test_empty_body_is_none() {
        assert!(extract("").await.ok().unwrap().is_none());
        assert!(extract("  \n").await.ok().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_null_body_is_none() {
        assert!(extract("null").await.ok().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_object_body_is_parsed() {
        let request = extract(r#"{"companyName":"Acme","mainPhone":""}"#)
            .await
            .ok()
            .unwrap()
            .unwrap();
        assert_eq!(request.company_name.as_deref(), Some("Acme"));
        assert_eq!(request.main_phone, None);
    }

    #[tokio::test]
    async fn test_query_with_wrong_type_is_rejected() {
        #[derive(Debug, serde::Deserialize)]
        struct Paging {
            #[allow(dead_code)]
            limit: u32,
        }

        let req = Request::builder()
            .uri("/partners/search?limit=lots")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let Err(AppError(err)) = QueryParams::<Paging>::from_request_parts(&mut parts, &()).await
        else {
            panic!("expected rejection");
        };
        assert!(matches!(
            err.downcast_ref::<RequestError>(),
            Some(RequestError::InvalidQuery(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let Err(AppError(err)) = extract("{companyName:").await else {
            panic!("expected rejection");
        };
        assert!(matches!(
            err.downcast_ref::<RequestError>(),
            Some(RequestError::MalformedJson(_))
        ));
    }
}
