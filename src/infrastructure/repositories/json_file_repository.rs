use crate::{
    domain::catalog::{
        entity::{CatalogItem, EntityKind},
        errors::DomainError,
        language::Language,
        repository::CatalogRepository,
    },
    infrastructure::cache::snapshot_cache::{CachePolicy, SnapshotCache},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;

/// Serves catalog documents from `<root>/<language>/<kind>.json`.
pub struct JsonFileRepository {
    root: PathBuf,
    items: SnapshotCache<(Language, EntityKind), Vec<CatalogItem>>,
    documents: SnapshotCache<Language, Value>,
}

impl JsonFileRepository {
    pub fn new(root: impl Into<PathBuf>, policy: CachePolicy) -> Self {
        Self {
            root: root.into(),
            items: SnapshotCache::new(policy),
            documents: SnapshotCache::new(policy),
        }
    }

    /// Number of documents currently held in memory.
    pub fn cached_documents(&self) -> usize {
        self.items.len() + self.documents.len()
    }

    pub fn path_for(&self, language: Language, kind: EntityKind) -> PathBuf {
        self.root.join(language.code()).join(kind.file_name())
    }
}

/// Single read attempt; any I/O or parse failure is reported with the path.
async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let data_access = |reason: String| DomainError::DataAccess {
        path: path.display().to_string(),
        reason,
    };

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        debug!(path = %path.display(), error = %e, "Catalog document unreadable");
        data_access(e.to_string())
    })?;

    let parsed = serde_json::from_slice(&bytes).map_err(|e| {
        debug!(path = %path.display(), error = %e, "Catalog document is not valid JSON");
        data_access(e.to_string())
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Loaded catalog document");
    Ok(parsed)
}

#[async_trait]
impl CatalogRepository for JsonFileRepository {
    async fn items(
        &self,
        language: Language,
        kind: EntityKind,
    ) -> Result<Arc<Vec<CatalogItem>>, DomainError> {
        let path = self.path_for(language, kind);
        self.items
            .get_or_load((language, kind), || read_json::<Vec<CatalogItem>>(&path))
            .await
    }

    async fn document(&self, language: Language) -> Result<Arc<Value>, DomainError> {
        let path = self.path_for(language, EntityKind::All);
        self.documents
            .get_or_load(language, || read_json::<Value>(&path))
            .await
    }
}
