use crate::{
    domain::catalog::{
        entity::{CatalogItem, EntityKind},
        language::Language,
    },
    presentation::http::{errors::AppError, extractors::LanguagePath, state::AppState},
};
use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// `GET /api/{language}/all.json`: the whole document, untransformed.
#[instrument(skip(state))]
pub async fn get_all(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
) -> Result<Json<Arc<Value>>, AppError> {
    Ok(Json(state.catalog.document(language).await?))
}

async fn list(
    state: &AppState,
    language: Language,
    kind: EntityKind,
) -> Result<Json<Arc<Vec<CatalogItem>>>, AppError> {
    Ok(Json(state.catalog.items(language, kind).await?))
}

#[instrument(skip(state))]
pub async fn get_stickers(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
) -> Result<Json<Arc<Vec<CatalogItem>>>, AppError> {
    list(&state, language, EntityKind::Stickers).await
}

#[instrument(skip(state))]
pub async fn get_collections(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
) -> Result<Json<Arc<Vec<CatalogItem>>>, AppError> {
    list(&state, language, EntityKind::Collections).await
}

#[instrument(skip(state))]
pub async fn get_crates(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
) -> Result<Json<Arc<Vec<CatalogItem>>>, AppError> {
    list(&state, language, EntityKind::Crates).await
}
