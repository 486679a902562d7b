use super::dto::SkinFilter;
use crate::domain::catalog::{
    entity::{CatalogItem, EntityKind},
    errors::DomainError,
    language::Language,
    repository::CatalogRepository,
};
use std::sync::Arc;

pub struct FilterSkinsUseCase {
    repository: Arc<dyn CatalogRepository>,
}

impl FilterSkinsUseCase {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        language: Language,
        grouped: bool,
        filter: &SkinFilter,
    ) -> Result<Vec<CatalogItem>, DomainError> {
        let skins = self
            .repository
            .items(language, EntityKind::skins(grouped))
            .await?;

        if filter.is_empty() {
            return Ok(skins.as_ref().clone());
        }

        let filtered = filter.apply(&skins);
        tracing::debug!(
            language = %language,
            grouped,
            total = skins.len(),
            matched = filtered.len(),
            "Filtered skins"
        );
        Ok(filtered)
    }
}
