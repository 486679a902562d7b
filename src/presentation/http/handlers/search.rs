use crate::{
    application::search_catalog::{dto::SearchResults, use_case::SearchCatalogUseCase},
    presentation::http::{errors::AppError, extractors::LanguagePath, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

/// `GET /api/{language}/search?q=`
///
/// `q` must be present; an empty `q` matches every item.
#[instrument(skip(state, query))]
pub async fn search_catalog(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResults>, AppError> {
    let Query(params) = query?;
    let q = params
        .q
        .ok_or_else(|| AppError::BadRequest("Search query is required".into()))?;

    let use_case = SearchCatalogUseCase::new(state.catalog.clone());
    let results = use_case.execute(language, &q).await?;
    Ok(Json(results))
}
