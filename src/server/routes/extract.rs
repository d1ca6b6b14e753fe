use crate::error::ApiError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

/// The `page` query parameter. A missing or non-integer value reads as absent;
/// when repeated, the first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub Option<i64>);

impl PageQuery {
    /// For endpoints where the page is mandatory.
    pub fn required(self) -> Result<i64, ApiError> {
        self.0
            .ok_or_else(|| ApiError::bad_request("missing or non-integer `page` query parameter"))
    }

    /// For endpoints where the page defaults to the first one.
    pub fn or_first(self) -> i64 {
        self.0.unwrap_or(1)
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "page"))
            .and_then(|(_, raw)| raw.trim().parse::<i64>().ok());

        Ok(PageQuery(page))
    }
}
