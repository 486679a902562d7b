use crate::domain::catalog::entity::CatalogItem;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub skins: Vec<CatalogItem>,
    pub stickers: Vec<CatalogItem>,
    pub collections: Vec<CatalogItem>,
    pub crates: Vec<CatalogItem>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.skins.len() + self.stickers.len() + self.collections.len() + self.crates.len()
    }
}
