use crate::{
    application::filter_skins::{dto::SkinFilter, use_case::FilterSkinsUseCase},
    domain::catalog::{entity::CatalogItem, errors::DomainError, language::Language},
    presentation::http::{errors::AppError, extractors::LanguagePath, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::instrument;

/// Query parameters accepted by both skin listings.
///
/// `weapon` and `rarity` are closed enumerations; `collection` and `crate`
/// are free-form ids that simply match nothing when unknown.
#[derive(Debug, Default, Deserialize)]
pub struct SkinQuery {
    weapon: Option<String>,
    rarity: Option<String>,
    collection: Option<String>,
    #[serde(rename = "crate")]
    crate_id: Option<String>,
}

/// Empty parameters (`?weapon=`) are treated as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<SkinQuery> for SkinFilter {
    type Error = DomainError;

    /// Weapon is checked before rarity, so a request with both invalid
    /// reports the weapon.
    fn try_from(query: SkinQuery) -> Result<Self, Self::Error> {
        Ok(SkinFilter {
            weapon: non_empty(query.weapon).map(|w| w.parse()).transpose()?,
            rarity: non_empty(query.rarity).map(|r| r.parse()).transpose()?,
            collection: non_empty(query.collection),
            crate_id: non_empty(query.crate_id),
        })
    }
}

async fn filtered_skins(
    state: AppState,
    language: Language,
    grouped: bool,
    query: Result<Query<SkinQuery>, QueryRejection>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    let Query(query) = query?;
    let filter = SkinFilter::try_from(query)?;

    let use_case = FilterSkinsUseCase::new(state.catalog.clone());
    let skins = use_case.execute(language, grouped, &filter).await?;
    Ok(Json(skins))
}

/// `GET /api/{language}/skins.json`
#[instrument(skip(state, query))]
pub async fn get_skins(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
    query: Result<Query<SkinQuery>, QueryRejection>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    filtered_skins(state, language, true, query).await
}

/// `GET /api/{language}/skins_not_grouped.json`
#[instrument(skip(state, query))]
pub async fn get_skins_not_grouped(
    State(state): State<AppState>,
    LanguagePath(language): LanguagePath,
    query: Result<Query<SkinQuery>, QueryRejection>,
) -> Result<Json<Vec<CatalogItem>>, AppError> {
    filtered_skins(state, language, false, query).await
}
