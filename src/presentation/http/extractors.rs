use super::errors::AppError;
use crate::domain::catalog::language::Language;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `{language}` path segment, validated against the allow-list before
/// the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePath(pub Language);

impl<S> FromRequestParts<S> for LanguagePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(code) = Path::<String>::from_request_parts(parts, state).await?;
        let language = code.parse::<Language>()?;
        Ok(LanguagePath(language))
    }
}
