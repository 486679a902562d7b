use super::entity::{CatalogItem, EntityKind};
use super::errors::DomainError;
use super::language::Language;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Read access to the pre-generated catalog documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Records of a list kind (`skins.json`, `stickers.json`, ...) for one language.
    async fn items(
        &self,
        language: Language,
        kind: EntityKind,
    ) -> Result<Arc<Vec<CatalogItem>>, DomainError>;

    /// The `all.json` document for one language, untouched.
    async fn document(&self, language: Language) -> Result<Arc<Value>, DomainError>;
}
