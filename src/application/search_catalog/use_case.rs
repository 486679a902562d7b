use super::dto::SearchResults;
use crate::domain::catalog::{
    entity::{CatalogItem, EntityKind},
    errors::DomainError,
    language::Language,
    repository::CatalogRepository,
};
use std::sync::Arc;

/// Case-insensitive substring search over every entity kind of one language.
pub struct SearchCatalogUseCase {
    repository: Arc<dyn CatalogRepository>,
}

impl SearchCatalogUseCase {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Fetches the four collections concurrently. The first failed fetch
    /// aborts the search; there are no partial results.
    pub async fn execute(
        &self,
        language: Language,
        query: &str,
    ) -> Result<SearchResults, DomainError> {
        let (skins, stickers, collections, crates) = tokio::try_join!(
            self.repository.items(language, EntityKind::Skins),
            self.repository.items(language, EntityKind::Stickers),
            self.repository.items(language, EntityKind::Collections),
            self.repository.items(language, EntityKind::Crates),
        )?;

        let needle = query.to_lowercase();
        let results = SearchResults {
            skins: matching(&skins, &needle, true),
            stickers: matching(&stickers, &needle, false),
            collections: matching(&collections, &needle, false),
            crates: matching(&crates, &needle, false),
        };

        tracing::debug!(
            language = %language,
            query,
            matched = results.total(),
            "Catalog search completed"
        );
        Ok(results)
    }
}

fn contains_lowercase(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|text| text.to_lowercase().contains(needle))
}

/// `needle` must already be lowercased.
fn matching(items: &[CatalogItem], needle: &str, with_description: bool) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| {
            contains_lowercase(item.name(), needle)
                || (with_description && contains_lowercase(item.description(), needle))
        })
        .cloned()
        .collect()
}
