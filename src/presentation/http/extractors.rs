// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// The `{id}` segment of an article route.
///
/// A segment that is not an integer cannot name a stored article, so it is
/// answered like any other missing record instead of as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleIdParam(pub i64);

impl ArticleIdParam {
    pub fn parse(raw: &str) -> Result<Self, ApplicationError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApplicationError::not_found(format!("article {raw} not found")))
    }
}

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| HttpError::from_error(ApplicationError::not_found(err.body_text())))?;

        Self::parse(&raw).map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_segments_parse() {
        assert_eq!(ArticleIdParam::parse("42").unwrap(), ArticleIdParam(42));
        assert_eq!(ArticleIdParam::parse("-1").unwrap(), ArticleIdParam(-1));
    }

    #[test]
    fn other_segments_are_missing_articles() {
        for raw in ["abc", "1.5", "", "99999999999999999999"] {
            let err = ArticleIdParam::parse(raw).unwrap_err();
            assert!(err.is_not_found(), "{raw:?}");
        }
    }
}
