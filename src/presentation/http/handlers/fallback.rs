use crate::presentation::http::errors::AppError;
use axum::http::Uri;

pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound
}
