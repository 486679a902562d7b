//! Startup initialization of the catalog data.
//!
//! The server must not accept traffic with a data directory it cannot read,
//! so everything here returns `anyhow` errors that abort `main`.

use crate::domain::catalog::{
    entity::EntityKind, language::Language, repository::CatalogRepository,
};
use anyhow::{Context, bail};
use std::path::Path;
use tracing::{debug, info};

/// Fails unless `root` is an existing directory.
pub fn ensure_data_dir(root: &Path) -> anyhow::Result<()> {
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Catalog data directory {} is not accessible", root.display()))?;
    if !metadata.is_dir() {
        bail!("Catalog data path {} is not a directory", root.display());
    }
    Ok(())
}

/// Reads every document of every given language through the repository.
///
/// With a snapshot cache this warms it; without one it still proves every
/// file exists and parses. Returns the number of documents read.
pub async fn preload(
    repository: &dyn CatalogRepository,
    languages: &[Language],
) -> anyhow::Result<usize> {
    let mut loaded = 0;

    for &language in languages {
        repository
            .document(language)
            .await
            .with_context(|| format!("Failed to load {}/{}", language, EntityKind::All))?;
        loaded += 1;

        for kind in EntityKind::LISTS {
            let items = repository
                .items(language, kind)
                .await
                .with_context(|| format!("Failed to load {}/{}", language, kind))?;
            debug!(language = %language, kind = %kind, items = items.len(), "Preloaded");
            loaded += 1;
        }
    }

    info!(languages = languages.len(), documents = loaded, "Catalog data preloaded");
    Ok(loaded)
}
